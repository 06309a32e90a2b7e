//! Helper functions shared across the UI layer.

use crate::app::App;
use crate::route::Page;
use crate::store::{Article, Section};
use chrono::NaiveDate;
use ratatui::layout::Rect;

/// Frames for the loading spinner.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub(super) fn spinner_char(frame: usize) -> char {
    SPINNER[frame % SPINNER.len()]
}

/// Format a publication date for bylines and list rows.
pub(super) fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// A centered overlay rectangle clamped to the frame.
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Move a selection index within a list of `len` items.
pub(super) fn move_selection(len: usize, current: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = len - 1;
    if delta < 0 {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        (current + delta as usize).min(max)
    }
}

/// The navigable article list for the current page.
///
/// Home navigates the latest list, category pages their section's articles,
/// and the article detail page its related block. Admin and NotFound have
/// their own selection models.
pub(super) fn page_articles(app: &App) -> Vec<&Article> {
    match &app.page {
        Page::Home => app.store.latest(),
        Page::Category { slug } => match Section::from_slug(slug) {
            Some(section) => app.store.by_category(section, None),
            None => Vec::new(),
        },
        Page::Article(article) => app.store.related(article),
        Page::Admin | Page::NotFound => Vec::new(),
    }
}

/// Slug of the currently selected article on the current page, if any.
pub(super) fn selected_slug(app: &App) -> Option<String> {
    page_articles(app)
        .get(app.selected)
        .map(|a| a.slug.clone())
}
