//! Admin panel: the article table and the edit form.

use crate::app::{AdminField, App};
use crate::util::{display_width, truncate_to_width};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::helpers::format_date;

const FIELDS: [AdminField; 7] = [
    AdminField::Title,
    AdminField::Excerpt,
    AdminField::Content,
    AdminField::Author,
    AdminField::ImageUrl,
    AdminField::Category,
    AdminField::Tags,
];

pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    match &app.admin.form {
        Some(_) => render_form(f, app, area),
        None => render_table(f, app, area),
    }
}

fn render_table(f: &mut Frame, app: &App, area: Rect) {
    let avail = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = if app.store.is_empty() {
        vec![ListItem::new("No articles. Press n to create one.")]
    } else {
        app.store
            .all()
            .iter()
            .enumerate()
            .map(|(i, article)| {
                let style = if i == app.admin.selected {
                    app.palette.admin_row_selected
                } else {
                    app.palette.admin_row
                };
                let meta = format!(
                    "  {} · {} · /article/{}",
                    article.category.name(),
                    format_date(article.date),
                    article.slug
                );
                // The title keeps at least 16 columns; an overlong meta
                // column clips at the right edge instead
                let title_width = avail.saturating_sub(display_width(&meta)).max(16.min(avail));
                ListItem::new(Line::from(vec![
                    Span::styled(
                        truncate_to_width(&article.title, title_width).into_owned(),
                        style,
                    ),
                    Span::styled(meta, app.palette.card_meta),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.palette.panel_border_focused)
            .title(format!(" Admin · {} articles ", app.store.len())),
    );
    f.render_widget(list, area);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.admin.form else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    for field in FIELDS {
        let label_style = if field == form.field {
            app.palette.admin_field_active
        } else {
            app.palette.admin_field_label
        };
        let marker = if field == form.field { "> " } else { "  " };
        let value = match field {
            AdminField::Title => form.draft.title.clone(),
            AdminField::Excerpt => form.draft.excerpt.clone(),
            AdminField::Content => {
                // Show only the first content line in the field row
                let first = form.draft.content.lines().next().unwrap_or("");
                let more = form.draft.content.lines().count().saturating_sub(1);
                if more > 0 {
                    format!("{} (+{} lines)", first, more)
                } else {
                    first.to_string()
                }
            }
            AdminField::Author => form.draft.author.clone(),
            AdminField::ImageUrl => form.draft.image_url.clone(),
            AdminField::Category => form
                .draft
                .category
                .map(|s| s.name().to_string())
                .unwrap_or_else(|| "(press Enter to pick)".to_string()),
            AdminField::Tags => form.tags_input.clone(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<10}", marker, field.label()), label_style),
            Span::styled(value, app.palette.admin_row),
        ]));
    }

    lines.push(Line::default());
    let title = if app.store.by_id(&form.draft.id).is_some() {
        " Edit Article "
    } else {
        " New Article "
    };
    lines.push(Line::styled(
        "Tab next field · Enter picks category / breaks content · Ctrl+S save · Esc cancel",
        app.palette.card_meta,
    ));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.palette.panel_border_focused)
            .title(title),
    );
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::config::Config;
    use crate::route::Router;
    use crate::session::Session;
    use crate::store::{ArticleDraft, ArticleStore, Section};
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_table_truncates_long_titles() {
        let dir = TempDir::new().unwrap();
        let mut store = ArticleStore::empty();
        let mut draft = ArticleDraft::new_article();
        draft.title =
            "A Headline Long Enough To Overflow The Admin Table Row Width".to_string();
        draft.content = "Body.".to_string();
        draft.category = Some(Section::Politics);
        store.save(draft);
        let app = App::new(
            store,
            Session::restore(dir.path()),
            Router::new("", "/admin"),
            &Config::default(),
        );

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| render(f, &app, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 1)].symbol())
            .collect();
        assert!(row.contains("A Headline"));
        assert!(row.contains("..."), "table row was clipped without an ellipsis: {row:?}");
    }
}
