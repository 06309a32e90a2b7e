use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use newsdesk::app::{App, AppEvent};
use newsdesk::config::Config;
use newsdesk::route::Router;
use newsdesk::session::{self, Session, SessionSlot};
use newsdesk::store::ArticleStore;
use newsdesk::ui;

/// Get the state directory path (~/.config/newsdesk/)
fn default_state_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("newsdesk"))
}

#[derive(Parser, Debug)]
#[command(name = "newsdesk", about = "Terminal client for the NewsDesk news site")]
struct Args {
    /// Forget the signed-in user before starting
    #[arg(long)]
    reset_session: bool,

    /// Directory for session state, config, and logs
    #[arg(long, value_name = "DIR")]
    state_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let state_dir = match args.state_dir {
        Some(dir) => dir,
        None => default_state_dir()?,
    };
    if !state_dir.exists() {
        std::fs::create_dir_all(&state_dir).context("Failed to create state directory")?;
    }

    // The session slot holds user data; keep the directory user-only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(&state_dir) {
            Ok(metadata) => {
                let mut perms = metadata.permissions();
                perms.set_mode(0o700);
                if let Err(e) = std::fs::set_permissions(&state_dir, perms) {
                    eprintln!(
                        "Warning: failed to set permissions on {}: {}",
                        state_dir.display(),
                        e
                    );
                }
            }
            Err(e) => {
                eprintln!(
                    "Warning: failed to read metadata for {}: {}",
                    state_dir.display(),
                    e
                );
            }
        }
    }

    // Log to a file so tracing output does not corrupt the TUI
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(state_dir.join("newsdesk.log"))
        .context("Failed to open log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let config = Config::load(&state_dir.join("config.toml")).context("Failed to load config")?;

    if args.reset_session {
        SessionSlot::new(&state_dir)
            .clear()
            .context("Failed to reset session")?;
        println!("Session reset.");
    }

    let session = Session::restore(&state_dir);

    // A stashed redirect (deep link carried across a restart) overrides the
    // start location once
    let initial_path = session::take_redirect(&state_dir).unwrap_or_else(|| "/".to_string());
    let router = Router::new(config.base_path.clone(), initial_path);

    let mut app = App::new(ArticleStore::seeded(), session, router, &config);

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // Run the TUI
    ui::run(&mut app, event_tx, event_rx).await?;

    println!("Goodbye!");
    Ok(())
}
