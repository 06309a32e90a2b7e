//! Category page: catalogue description plus the section's article list.

use crate::app::App;
use crate::route::Page;
use crate::store::{categories, Section};
use crate::util::title_from_slug;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::helpers::format_date;

pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let Page::Category { slug } = &app.page else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let (name, description) = match categories::by_slug(slug) {
        Some(cat) => (cat.name().to_string(), cat.description.to_string()),
        // An unrecognized slug still renders a page, just an empty one
        None => (title_from_slug(slug), String::new()),
    };

    let header = Paragraph::new(vec![
        Line::styled(name, app.palette.detail_heading),
        Line::styled(description, app.palette.card_meta),
    ]);
    f.render_widget(header, rows[0]);

    let articles = match Section::from_slug(slug) {
        Some(section) => app.store.by_category(section, None),
        None => Vec::new(),
    };

    let items: Vec<ListItem> = if articles.is_empty() {
        vec![ListItem::new("No articles in this section")]
    } else {
        articles
            .iter()
            .enumerate()
            .map(|(i, article)| {
                let style = if i == app.selected {
                    app.palette.card_selected
                } else {
                    app.palette.card_title
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(article.title.clone(), style),
                        Span::styled(
                            format!("  {}", format_date(article.date)),
                            app.palette.card_meta,
                        ),
                    ]),
                    Line::styled(
                        format!("  {}", article.excerpt),
                        app.palette.card_excerpt,
                    ),
                ])
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.palette.panel_border)
            .title(format!(" {} articles ", articles.len())),
    );
    f.render_widget(list, rows[1]);
}
