//! Main event loop for the TUI.
//!
//! This module contains the core event loop that multiplexes terminal input,
//! background task events, and periodic ticks, plus the spawn helpers for
//! every simulated-latency operation (search, sign-in, newsletter signup).

use crate::app::{App, AppEvent, NewsletterStatus};
use crate::auth::{self, Credentials};
use crate::search;
use crate::store::Article;
use anyhow::Result;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use super::events::handle_app_event;
use super::input::handle_input;
use super::render::render;

/// Result of handling a key press event.
pub enum Action {
    /// Continue the event loop and process more events.
    Continue,
    /// Exit the application and restore the terminal.
    Quit,
}

/// Runs the TUI application event loop.
///
/// Uses `tokio::select!` to multiplex three event sources:
/// - **Terminal input**: Key presses from crossterm's async event stream
/// - **Background tasks**: Search, sign-in, newsletter via `AppEvent` channel
/// - **Periodic tick**: 250ms timer for status expiry and debounced search
///
/// # Panic Safety
///
/// Installs a panic hook that restores terminal state before unwinding,
/// ensuring the terminal is not left in raw mode on panic.
pub async fn run(
    app: &mut App,
    event_tx: mpsc::Sender<AppEvent>,
    mut event_rx: mpsc::Receiver<AppEvent>,
) -> Result<()> {
    // Install panic hook BEFORE setting up terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;
    let mut event_stream = crossterm::event::EventStream::new();

    let mut tick_interval = tokio::time::interval(Duration::from_millis(250));

    // Signal handlers for graceful shutdown (Unix only)
    #[cfg(unix)]
    let mut sigterm = signal(SignalKind::terminate())?;
    #[cfg(unix)]
    let mut sigint = signal(SignalKind::interrupt())?;

    loop {
        // Only render when state has changed
        if app.needs_redraw {
            terminal.draw(|f| render(f, app))?;
            app.needs_redraw = false;
        }

        if app.clear_expired_status() {
            app.needs_redraw = true;
        }

        // Drain all pending app events before handling more input so task
        // results are processed promptly even during rapid typing.
        while let Ok(event) = event_rx.try_recv() {
            app.needs_redraw = true;
            handle_app_event(app, event);
        }

        #[cfg(unix)]
        let sigterm_fut = sigterm.recv();
        #[cfg(not(unix))]
        let sigterm_fut = std::future::pending::<Option<()>>();

        #[cfg(unix)]
        let sigint_fut = sigint.recv();
        #[cfg(not(unix))]
        let sigint_fut = std::future::pending::<Option<()>>();

        tokio::select! {
            biased;  // Process in order listed for predictable behavior

            _ = sigterm_fut => {
                tracing::info!("Received SIGTERM, shutting down gracefully");
                break;
            }

            _ = sigint_fut => {
                tracing::info!("Received SIGINT, shutting down gracefully");
                break;
            }

            // Terminal input events
            maybe_event = event_stream.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    app.needs_redraw = true;
                    match handle_input(app, key.code, key.modifiers, &event_tx) {
                        Action::Quit => break,
                        Action::Continue => {}
                    }
                }
            }

            // Background task events (blocking recv for when queue was empty)
            Some(event) = event_rx.recv() => {
                app.needs_redraw = true;
                handle_app_event(app, event);
            }

            // Periodic tick for status expiry and debounced search
            _ = tick_interval.tick() => {
                handle_tick(app, &event_tx);
            }
        }
    }

    restore_terminal(terminal)?;
    Ok(())
}

/// Number of frames in the loading spinner animation.
const SPINNER_FRAMES: usize = 10;

/// Debounce window between the last search keystroke and execution.
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Handle periodic tick for debounced search execution.
fn handle_tick(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    // Animate spinner while any fake-async operation is in flight
    let submitting = app.auth_modal.as_ref().map(|m| m.submitting).unwrap_or(false);
    if app.searching || submitting || app.newsletter.status == NewsletterStatus::Submitting {
        app.spinner_frame = (app.spinner_frame + 1) % SPINNER_FRAMES;
        app.needs_redraw = true;
    }

    // Only execute debounced search while the overlay is still open
    if app.search_mode {
        if let Some(last_keystroke) = app.search_debounce {
            if last_keystroke.elapsed() >= SEARCH_DEBOUNCE {
                app.needs_redraw = true;
                if let Some(query) = app.pending_search.take() {
                    if query.len() > search::MAX_QUERY_LENGTH {
                        app.set_status(format!(
                            "Search query too long (max {} chars)",
                            search::MAX_QUERY_LENGTH
                        ));
                    } else {
                        // The empty query is a real search: it matches the
                        // whole catalogue.
                        spawn_search(app, query, event_tx);
                    }
                }
                app.search_debounce = None;
            }
        }
    }
}

/// Spawn a background search task with the configured simulated latency.
///
/// Any previous search is aborted; results carry a generation counter so a
/// stale completion can never overwrite a newer one.
pub(super) fn spawn_search(app: &mut App, query: String, event_tx: &mpsc::Sender<AppEvent>) {
    if let Some(handle) = app.search_handle.take() {
        handle.abort();
        tracing::debug!("Aborted previous search task");
    }

    app.search_generation = app.search_generation.wrapping_add(1);
    let generation = app.search_generation;
    app.searching = true;

    let articles: Vec<Article> = app.store.all().to_vec();
    let delay = app.search_delay;
    let tx = event_tx.clone();

    tracing::debug!(query = %query, generation, "Spawning search task");

    app.search_handle = Some(tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let results: Vec<Article> = articles
            .into_iter()
            .filter(|a| search::matches(a, &query))
            .collect();
        let event = AppEvent::SearchCompleted {
            query,
            generation,
            results,
        };
        if let Err(e) = tx.send(event).await {
            tracing::warn!(error = %e, "Failed to send search results (receiver dropped)");
        }
    }));
}

/// Spawn the mock sign-in task. Dismissing the modal aborts it.
pub(super) fn spawn_login(app: &mut App, credentials: Credentials, event_tx: &mpsc::Sender<AppEvent>) {
    if let Some(handle) = app.auth_handle.take() {
        handle.abort();
        tracing::debug!("Aborted previous sign-in task");
    }

    app.auth_generation = app.auth_generation.wrapping_add(1);
    let generation = app.auth_generation;
    let tx = event_tx.clone();

    tracing::debug!(generation, "Spawning sign-in task");

    app.auth_handle = Some(tokio::spawn(async move {
        let result = auth::authenticate(credentials, auth::AUTH_DELAY).await;
        let event = AppEvent::LoginCompleted { generation, result };
        if let Err(e) = tx.send(event).await {
            tracing::warn!(error = %e, "Failed to send sign-in result (receiver dropped)");
        }
    }));
}

/// Simulated latency for the newsletter signup.
const NEWSLETTER_DELAY: Duration = Duration::from_millis(1000);

/// Spawn the fake newsletter subscribe. Closing the form aborts it.
pub(super) fn spawn_newsletter(app: &mut App, email: String, event_tx: &mpsc::Sender<AppEvent>) {
    if let Some(handle) = app.newsletter_handle.take() {
        handle.abort();
        tracing::debug!("Aborted previous newsletter task");
    }

    app.newsletter_generation = app.newsletter_generation.wrapping_add(1);
    let generation = app.newsletter_generation;
    app.newsletter.status = NewsletterStatus::Submitting;
    let tx = event_tx.clone();

    tracing::debug!(email = %email, generation, "Spawning newsletter signup task");

    app.newsletter_handle = Some(tokio::spawn(async move {
        tokio::time::sleep(NEWSLETTER_DELAY).await;
        let event = AppEvent::NewsletterSubscribed { generation, email };
        if let Err(e) = tx.send(event).await {
            tracing::warn!(error = %e, "Failed to send newsletter result (receiver dropped)");
        }
    }));
}

/// Set up the terminal for TUI rendering.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state.
fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
