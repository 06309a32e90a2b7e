//! Render functions for the TUI.
//!
//! Dispatches to the page renderer for the current route, then layers any
//! active overlays (search, auth, bookmarks) on top.

use crate::app::App;
use crate::route::Page;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use super::{admin, article, category, home, modals, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 60;
pub(super) const MIN_HEIGHT: u16 = 12;

/// Main render dispatch function.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    // Page area, optional newsletter bar, status bar
    let rows = if app.newsletter.active {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area)
    };

    match &app.page {
        Page::Home => home::render(f, app, rows[0]),
        Page::Article(_) => article::render(f, app, rows[0]),
        Page::Category { .. } => category::render(f, app, rows[0]),
        Page::Admin => admin::render(f, app, rows[0]),
        Page::NotFound => render_not_found(f, app, rows[0]),
    }

    if app.newsletter.active {
        modals::render_newsletter_bar(f, app, rows[1]);
    }
    status::render(f, app, rows[rows.len() - 1]);

    // Overlays on top of any page
    if app.search_mode {
        modals::render_search_overlay(f, app);
    }
    if app.show_bookmarks {
        modals::render_bookmarks_overlay(f, app);
    }
    if app.auth_modal.is_some() {
        modals::render_auth_modal(f, app);
    }
}

/// The not-found page for a recognized article path with no matching slug.
fn render_not_found(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let text = "404\n\nThis story does not exist or has been removed.\n\n\
                Press Backspace to go back, or g for the front page.";
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(app.palette.detail_body);

    // Center vertically with a top margin
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Min(5),
            Constraint::Percentage(30),
        ])
        .split(area);
    f.render_widget(paragraph, chunks[1]);
}
