//! Background task event processing.
//!
//! Every `AppEvent` carries the generation counter captured when its task
//! was spawned. A mismatch means the operation was superseded or dismissed
//! after the task fired, and the result is dropped.

use crate::app::{App, AppEvent, NewsletterStatus, NEWSLETTER_THANKS};

pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::SearchCompleted {
            query,
            generation,
            results,
        } => {
            if generation != app.search_generation {
                tracing::debug!(
                    query = %query,
                    generation,
                    current = app.search_generation,
                    "Dropping stale search results"
                );
                return;
            }
            if !app.search_mode {
                tracing::debug!(query = %query, "Dropping search results after overlay close");
                return;
            }
            tracing::debug!(query = %query, count = results.len(), "Search completed");
            app.searching = false;
            app.search_selected = 0;
            app.search_results = Some(results);
        }

        AppEvent::LoginCompleted { generation, result } => {
            if generation != app.auth_generation {
                tracing::debug!(
                    generation,
                    current = app.auth_generation,
                    "Dropping stale sign-in result"
                );
                return;
            }
            match result {
                Ok(user) => app.apply_login(user),
                Err(e) => {
                    if let Some(modal) = app.auth_modal.as_mut() {
                        modal.submitting = false;
                        modal.error = Some(e.to_string());
                    }
                }
            }
        }

        AppEvent::NewsletterSubscribed { generation, email } => {
            if generation != app.newsletter_generation {
                tracing::debug!(
                    generation,
                    current = app.newsletter_generation,
                    "Dropping stale newsletter result"
                );
                return;
            }
            tracing::info!(email = %email, "Newsletter signup completed");
            app.newsletter.status = NewsletterStatus::Subscribed;
            app.newsletter.input.clear();
            app.set_status(NEWSLETTER_THANKS);
        }
    }
}
