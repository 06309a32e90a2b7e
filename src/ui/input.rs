//! Keyboard input handling.
//!
//! Dispatch order matters: open overlays and forms capture text input
//! before any page-level shortcut is considered. Plain characters are only
//! shortcuts when nothing is capturing text.

use crate::app::{AdminField, AdminForm, App, AppEvent, NewsletterStatus};
use crate::auth::AuthMode;
use crate::route::Page;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::helpers::{self, move_selection};
use super::loop_runner::{spawn_login, spawn_newsletter, Action};

pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    // Overlays capture input first
    if app.auth_modal.is_some() {
        handle_auth_modal(app, code, modifiers, event_tx);
        return Action::Continue;
    }
    if app.search_mode {
        handle_search_overlay(app, code);
        return Action::Continue;
    }
    if app.show_bookmarks {
        handle_bookmarks_overlay(app, code);
        return Action::Continue;
    }
    if app.newsletter.active {
        handle_newsletter(app, code, event_tx);
        return Action::Continue;
    }
    if app.page == Page::Admin && app.admin.form.is_some() {
        handle_admin_form(app, code, modifiers);
        return Action::Continue;
    }

    // Page-level and global shortcuts
    match code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('/') => app.open_search(),
        KeyCode::Char('t') => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        KeyCode::Char('u') => {
            if app.session.is_authenticated() {
                app.logout();
            } else {
                app.open_auth(AuthMode::Login);
            }
        }
        KeyCode::Char('B') => {
            if app.session.is_authenticated() {
                app.show_bookmarks = true;
                app.bookmarks_selected = 0;
            } else {
                app.set_status("Sign in to see your bookmarks");
            }
        }
        KeyCode::Char('w') => {
            app.newsletter.active = true;
            if app.newsletter.status != NewsletterStatus::Subscribed {
                app.newsletter.status = NewsletterStatus::Idle;
            }
        }
        KeyCode::Char('g') => app.navigate("/"),
        KeyCode::Char('a') => app.navigate("/admin"),
        KeyCode::Char(c @ '1'..='8') => {
            let idx = c as usize - '1' as usize;
            let slug = crate::store::Section::ALL[idx].slug();
            app.navigate(format!("/category/{}", slug));
        }
        KeyCode::Left | KeyCode::Backspace => app.go_back(),
        KeyCode::Right => app.go_forward(),
        _ => handle_page_keys(app, code),
    }

    Action::Continue
}

/// Keys specific to the current page.
fn handle_page_keys(app: &mut App, code: KeyCode) {
    match &app.page {
        Page::Admin => handle_admin_table(app, code),
        Page::Article(_) => handle_article_page(app, code),
        Page::Home | Page::Category { .. } | Page::NotFound => match code {
            KeyCode::Down | KeyCode::Char('j') => {
                app.selected = move_selection(helpers::page_articles(app).len(), app.selected, 1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.selected = move_selection(helpers::page_articles(app).len(), app.selected, -1);
            }
            KeyCode::Enter => {
                if let Some(slug) = helpers::selected_slug(app) {
                    app.open_href(&format!("/article/{}", slug));
                }
            }
            _ => {}
        },
    }
}

/// Article detail: scroll the body, act on the article, open related.
fn handle_article_page(app: &mut App, code: KeyCode) {
    let Page::Article(article) = &app.page else {
        return;
    };
    match code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_offset = app.scroll_offset.saturating_add(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_offset = app.scroll_offset.saturating_sub(1);
        }
        KeyCode::Char('b') => {
            let id = article.id.clone();
            app.toggle_bookmark(&id);
        }
        KeyCode::Char('s') => {
            let article = article.clone();
            app.share_article(&article);
        }
        KeyCode::Tab => {
            app.selected = move_selection(helpers::page_articles(app).len(), app.selected, 1);
        }
        KeyCode::Enter => {
            if let Some(slug) = helpers::selected_slug(app) {
                app.open_href(&format!("/article/{}", slug));
            }
        }
        _ => {}
    }
}

// ============================================================================
// Search overlay
// ============================================================================

fn handle_search_overlay(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.close_search(),
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.queue_search();
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.queue_search();
        }
        KeyCode::Down => {
            let len = app.search_results.as_ref().map(Vec::len).unwrap_or(0);
            app.search_selected = move_selection(len, app.search_selected, 1);
        }
        KeyCode::Up => {
            let len = app.search_results.as_ref().map(Vec::len).unwrap_or(0);
            app.search_selected = move_selection(len, app.search_selected, -1);
        }
        KeyCode::Enter => {
            let slug = app
                .search_results
                .as_ref()
                .and_then(|r| r.get(app.search_selected))
                .map(|a| a.slug.clone());
            if let Some(slug) = slug {
                app.close_search();
                app.open_href(&format!("/article/{}", slug));
            }
        }
        _ => {}
    }
}

// ============================================================================
// Bookmarks overlay
// ============================================================================

fn handle_bookmarks_overlay(app: &mut App, code: KeyCode) {
    let len = app.bookmarked_articles().len();
    match code {
        KeyCode::Esc | KeyCode::Char('B') => {
            app.show_bookmarks = false;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.bookmarks_selected = move_selection(len, app.bookmarks_selected, 1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.bookmarks_selected = move_selection(len, app.bookmarks_selected, -1);
        }
        KeyCode::Char('d') => {
            let id = app
                .bookmarked_articles()
                .get(app.bookmarks_selected)
                .map(|a| a.id.clone());
            if let Some(id) = id {
                app.toggle_bookmark(&id);
                app.bookmarks_selected = app.bookmarks_selected.min(len.saturating_sub(2));
            }
        }
        KeyCode::Enter => {
            let slug = app
                .bookmarked_articles()
                .get(app.bookmarks_selected)
                .map(|a| a.slug.clone());
            if let Some(slug) = slug {
                app.show_bookmarks = false;
                app.open_href(&format!("/article/{}", slug));
            }
        }
        _ => {}
    }
}

// ============================================================================
// Newsletter form
// ============================================================================

fn handle_newsletter(app: &mut App, code: KeyCode, event_tx: &mpsc::Sender<AppEvent>) {
    match code {
        KeyCode::Esc => app.close_newsletter(),
        KeyCode::Char(c) => {
            app.newsletter.input.push(c);
            if matches!(app.newsletter.status, NewsletterStatus::Error(_)) {
                app.newsletter.status = NewsletterStatus::Idle;
            }
        }
        KeyCode::Backspace => {
            app.newsletter.input.pop();
        }
        KeyCode::Enter => {
            if app.newsletter.status == NewsletterStatus::Submitting {
                return;
            }
            if let Some(email) = app.newsletter_validate() {
                spawn_newsletter(app, email, event_tx);
            }
        }
        _ => {}
    }
}

// ============================================================================
// Auth modal
// ============================================================================

fn handle_auth_modal(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    // Dismissing cancels any pending sign-in
    if code == KeyCode::Esc {
        app.close_auth();
        return;
    }

    let Some(modal) = app.auth_modal.as_mut() else {
        return;
    };
    if modal.submitting && code != KeyCode::Esc {
        return;
    }

    match code {
        KeyCode::Tab => modal.field = modal.field.next(modal.mode),
        KeyCode::Char('t') if modifiers.contains(KeyModifiers::CONTROL) => {
            modal.toggle_mode();
        }
        KeyCode::Char(c) => {
            modal.active_input().push(c);
            modal.error = None;
        }
        KeyCode::Backspace => {
            modal.active_input().pop();
        }
        KeyCode::Enter => {
            let credentials = modal.credentials();
            // Empty required fields never start the timer
            if let Err(e) = credentials.validate() {
                modal.error = Some(e.to_string());
                return;
            }
            modal.submitting = true;
            modal.error = None;
            spawn_login(app, credentials, event_tx);
        }
        _ => {}
    }
}

// ============================================================================
// Admin panel
// ============================================================================

fn handle_admin_table(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.admin.selected = move_selection(app.store.len(), app.admin.selected, 1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.admin.selected = move_selection(app.store.len(), app.admin.selected, -1);
        }
        KeyCode::Char('n') => {
            app.admin.form = Some(AdminForm::create());
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(article) = app.store.all().get(app.admin.selected) {
                app.admin.form = Some(AdminForm::edit(article));
            }
        }
        KeyCode::Char('d') => {
            let id = app
                .store
                .all()
                .get(app.admin.selected)
                .map(|a| a.id.clone());
            if let Some(id) = id {
                app.admin_delete(&id);
            }
        }
        _ => {}
    }
}

fn handle_admin_form(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // Save from any field
    if code == KeyCode::Char('s') && modifiers.contains(KeyModifiers::CONTROL) {
        app.admin_save();
        return;
    }
    if code == KeyCode::Esc {
        app.admin.form = None;
        app.needs_redraw = true;
        return;
    }

    let Some(form) = app.admin.form.as_mut() else {
        return;
    };
    match code {
        KeyCode::Tab => form.field = form.field.next(),
        KeyCode::BackTab => form.field = form.field.prev(),
        KeyCode::Enter if form.field == AdminField::Category => form.cycle_category(),
        KeyCode::Enter if form.field == AdminField::Content => {
            // Blank-line paragraph breaks are part of the content format
            if let Some(input) = form.active_input() {
                input.push('\n');
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = form.active_input() {
                input.push(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = form.active_input() {
                input.pop();
            }
        }
        _ => {}
    }
}
