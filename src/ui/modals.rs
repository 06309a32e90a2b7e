//! Overlay widgets: search, auth modal, bookmarks list, newsletter bar.

use crate::app::{App, AuthField, NewsletterStatus};
use crate::auth::AuthMode;
use crate::util::{display_width, truncate_to_width};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::helpers::{centered_rect, format_date, spinner_char};

// ============================================================================
// Search overlay
// ============================================================================

pub(super) fn render_search_overlay(f: &mut Frame, app: &App) {
    let area = centered_rect(70, 20, f.area());
    if area.width < 20 || area.height < 6 {
        return;
    }
    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled("> ", app.palette.admin_field_active),
        Span::styled(format!("{}_", app.search_input), app.palette.detail_body),
    ]));
    lines.push(Line::default());

    if app.searching {
        lines.push(Line::styled(
            format!("{} Searching...", spinner_char(app.spinner_frame)),
            app.palette.card_meta,
        ));
    } else {
        match &app.search_results {
            None => {
                lines.push(Line::styled(
                    "Type to search all articles",
                    app.palette.card_meta,
                ));
            }
            Some(results) if results.is_empty() => {
                lines.push(Line::styled("No matches", app.palette.card_meta));
            }
            Some(results) => {
                let visible = area.height.saturating_sub(5) as usize;
                let avail = area.width.saturating_sub(2) as usize;
                for (i, article) in results.iter().take(visible.max(1)).enumerate() {
                    let style = if i == app.search_selected {
                        app.palette.card_selected
                    } else {
                        app.palette.card_title
                    };
                    let category = format!("  {}", article.category.name());
                    let title_width = avail.saturating_sub(display_width(&category));
                    lines.push(Line::from(vec![
                        Span::styled(
                            truncate_to_width(&article.title, title_width).into_owned(),
                            style,
                        ),
                        Span::styled(category, app.palette.card_meta),
                    ]));
                }
                lines.push(Line::default());
                lines.push(Line::styled(
                    format!("{} result(s) · Enter open · Esc close", results.len()),
                    app.palette.card_meta,
                ));
            }
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.palette.modal_border)
            .title(" Search "),
    );
    f.render_widget(paragraph, area);
}

// ============================================================================
// Auth modal
// ============================================================================

pub(super) fn render_auth_modal(f: &mut Frame, app: &App) {
    let Some(modal) = &app.auth_modal else {
        return;
    };
    let area = centered_rect(50, 14, f.area());
    if area.width < 24 || area.height < 8 {
        return;
    }
    f.render_widget(Clear, area);

    let field_line = |label: &str, value: &str, active: bool, masked: bool| {
        let marker = if active { "> " } else { "  " };
        let shown = if masked {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let style = if active {
            app.palette.admin_field_active
        } else {
            app.palette.admin_field_label
        };
        Line::from(vec![
            Span::styled(format!("{}{:<10}", marker, label), style),
            Span::styled(shown, app.palette.detail_body),
        ])
    };

    let mut lines: Vec<Line> = Vec::new();
    if modal.mode == AuthMode::Register {
        lines.push(field_line(
            "Name",
            &modal.name,
            modal.field == AuthField::Name,
            false,
        ));
    }
    lines.push(field_line(
        "Email",
        &modal.email,
        modal.field == AuthField::Email,
        false,
    ));
    lines.push(field_line(
        "Password",
        &modal.password,
        modal.field == AuthField::Password,
        true,
    ));
    lines.push(Line::default());

    if modal.submitting {
        lines.push(Line::styled(
            format!("{} Signing in...", spinner_char(app.spinner_frame)),
            app.palette.card_meta,
        ));
    } else if let Some(error) = &modal.error {
        lines.push(Line::styled(error.clone(), app.palette.form_error));
    }

    lines.push(Line::default());
    let switch_hint = match modal.mode {
        AuthMode::Login => "No account? Ctrl+T to register",
        AuthMode::Register => "Have an account? Ctrl+T to sign in",
    };
    lines.push(Line::styled(
        format!("Enter submit · Tab field · {} · Esc cancel", switch_hint),
        app.palette.card_meta,
    ));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.palette.modal_border)
            .title(format!(" {} ", modal.mode.title())),
    );
    f.render_widget(paragraph, area);
}

// ============================================================================
// Bookmarks overlay
// ============================================================================

pub(super) fn render_bookmarks_overlay(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 16, f.area());
    if area.width < 20 || area.height < 5 {
        return;
    }
    f.render_widget(Clear, area);

    let bookmarks = app.bookmarked_articles();
    let mut lines: Vec<Line> = Vec::new();
    if bookmarks.is_empty() {
        lines.push(Line::styled(
            "No bookmarks yet. Press b on an article to save it.",
            app.palette.card_meta,
        ));
    } else {
        // Date column is "  Jan 01, 2024"
        let title_width = (area.width.saturating_sub(2) as usize).saturating_sub(14);
        for (i, article) in bookmarks.iter().enumerate() {
            let style = if i == app.bookmarks_selected {
                app.palette.card_selected
            } else {
                app.palette.card_title
            };
            lines.push(Line::from(vec![
                Span::styled(
                    truncate_to_width(&article.title, title_width).into_owned(),
                    style,
                ),
                Span::styled(
                    format!("  {}", format_date(article.date)),
                    app.palette.card_meta,
                ),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            "Enter open · d remove · Esc close",
            app.palette.card_meta,
        ));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.palette.modal_border)
            .title(" Bookmarks "),
    );
    f.render_widget(paragraph, area);
}

// ============================================================================
// Newsletter bar
// ============================================================================

pub(super) fn render_newsletter_bar(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.newsletter.status {
        NewsletterStatus::Submitting => Line::styled(
            format!(" {} Subscribing...", spinner_char(app.spinner_frame)),
            app.palette.card_meta,
        ),
        NewsletterStatus::Subscribed => Line::styled(
            format!(" {}", crate::app::NEWSLETTER_THANKS),
            app.palette.form_success,
        ),
        NewsletterStatus::Error(msg) => Line::from(vec![
            Span::styled(
                format!(" Newsletter: {}_  ", app.newsletter.input),
                app.palette.detail_body,
            ),
            Span::styled(*msg, app.palette.form_error),
        ]),
        NewsletterStatus::Idle => Line::from(vec![
            Span::styled(" Newsletter: ", app.palette.admin_field_label),
            Span::styled(
                format!("{}_", app.newsletter.input),
                app.palette.detail_body,
            ),
            Span::styled("  Enter subscribe · Esc close", app.palette.card_meta),
        ]),
    };
    f.render_widget(Paragraph::new(line), area);
}
