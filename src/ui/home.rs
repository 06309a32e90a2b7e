//! Front page: breaking ticker, featured stories, per-section blocks, and
//! the latest-news sidebar with the opinion column.

use crate::app::App;
use crate::store::Section;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::helpers::format_date;

pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // masthead
            Constraint::Length(1), // breaking ticker
            Constraint::Min(0),    // main content
        ])
        .split(area);

    render_masthead(f, app, rows[0]);
    render_ticker(f, app, rows[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[2]);

    render_front(f, app, columns[0]);
    render_sidebar(f, app, columns[1]);
}

fn render_masthead(f: &mut Frame, app: &App, area: Rect) {
    let user = match app.session.user() {
        Some(u) => format!("  {} ", u.name),
        None => "  sign in: u ".to_string(),
    };
    let line = Line::from(vec![
        Span::styled(" NEWSDESK ", app.palette.masthead),
        Span::styled("Independent Journalism", app.palette.nav_item),
        Span::styled(user, app.palette.nav_item),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// One-line breaking ticker: the head of the latest list.
fn render_ticker(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = app
        .store
        .breaking()
        .iter()
        .map(|a| a.title.clone())
        .collect();
    let text = format!(" BREAKING  {}", titles.join("  •  "));
    let text = truncate_to_width(&text, area.width as usize).into_owned();
    f.render_widget(
        Paragraph::new(text).style(app.palette.breaking_ticker),
        area,
    );
}

/// Featured stories followed by the per-section blocks.
fn render_front(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("FEATURED", app.palette.card_category));
    for article in app.store.featured() {
        lines.push(Line::from(vec![
            Span::styled("★ ", app.palette.card_featured_badge),
            Span::styled(article.title.clone(), app.palette.card_title),
        ]));
        lines.push(Line::styled(
            format!(
                "  {} · {} · {}",
                article.category.name(),
                article.author,
                format_date(article.date)
            ),
            app.palette.card_meta,
        ));
    }

    for section in Section::ALL {
        let block = app.store.section_block(section);
        if block.is_empty() {
            continue;
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            section.name().to_uppercase(),
            app.palette.card_category,
        ));
        for article in block {
            let mut spans = vec![Span::styled(
                article.title.clone(),
                app.palette.card_excerpt,
            )];
            if article.trending {
                spans.push(Span::styled(" ▲", app.palette.card_trending_badge));
            }
            lines.push(Line::from(spans));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.palette.panel_border)
            .title(" Front Page "),
    );
    f.render_widget(paragraph, area);
}

/// Latest list (the navigable selection target) above the opinion column.
fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let latest = app.store.latest();
    // Inside the borders, minus the date column ("  Jan 01, 2024")
    let title_width = (rows[0].width.saturating_sub(2) as usize).saturating_sub(14);
    let items: Vec<ListItem> = if latest.is_empty() {
        vec![ListItem::new("No articles")]
    } else {
        latest
            .iter()
            .enumerate()
            .map(|(i, article)| {
                let style = if i == app.selected {
                    app.palette.card_selected
                } else {
                    app.palette.card_title
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        truncate_to_width(&article.title, title_width).into_owned(),
                        style,
                    ),
                    Span::styled(
                        format!("  {}", format_date(article.date)),
                        app.palette.card_meta,
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.palette.panel_border_focused)
            .title(" Latest "),
    );
    f.render_widget(list, rows[0]);

    let opinion: Vec<Line> = app
        .store
        .by_category(Section::Opinion, Some(3))
        .iter()
        .flat_map(|a| {
            vec![
                Line::styled(a.title.clone(), app.palette.card_title),
                Line::styled(format!("  {}", a.author), app.palette.card_meta),
            ]
        })
        .collect();
    let paragraph = Paragraph::new(opinion).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.palette.panel_border)
            .title(" Opinion "),
    );
    f.render_widget(paragraph, rows[1]);
}
