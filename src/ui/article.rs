//! Article detail page: byline, body, tags, bookmark state, and the
//! related-articles block.

use crate::app::App;
use crate::route::Page;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::helpers::format_date;

pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let Page::Article(article) = &app.page else {
        return;
    };

    let related = app.store.related(article);
    let related_height = if related.is_empty() {
        0
    } else {
        related.len() as u16 + 2
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(related_height)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::styled(
        article.title.clone(),
        app.palette.detail_heading,
    ));

    let mut byline = format!(
        "{} · {} · {}",
        article.author,
        article.category.name(),
        format_date(article.date)
    );
    if let Some(minutes) = article.read_time {
        byline.push_str(&format!(" · {} min read", minutes));
    }
    if let Some(views) = article.views {
        byline.push_str(&format!(" · {} views", views));
    }
    lines.push(Line::styled(byline, app.palette.detail_byline));

    let mut flags: Vec<Span> = Vec::new();
    if app.session.is_bookmarked(&article.id) {
        flags.push(Span::styled("● bookmarked  ", app.palette.bookmark_active));
    }
    if !article.tags.is_empty() {
        let tags = article
            .tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        flags.push(Span::styled(tags, app.palette.detail_tag));
    }
    if !flags.is_empty() {
        lines.push(Line::from(flags));
    }

    lines.push(Line::default());
    for (i, paragraph) in article.paragraphs().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::styled(paragraph.to_string(), app.palette.detail_body));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset.min(u16::MAX as usize) as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.palette.panel_border)
                .title(" Article "),
        );
    f.render_widget(body, rows[0]);

    if !related.is_empty() {
        let items: Vec<ListItem> = related
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let style = if i == app.selected {
                    app.palette.card_selected
                } else {
                    app.palette.card_title
                };
                ListItem::new(Line::from(vec![
                    Span::styled(a.title.clone(), style),
                    Span::styled(
                        format!("  {}", a.category.name()),
                        app.palette.card_meta,
                    ),
                ]))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.palette.panel_border)
                .title(" Related "),
        );
        f.render_widget(list, rows[1]);
    }
}
