//! Session persistence and the signed-in user.
//!
//! The session lives in a single JSON slot on disk. Bookmark and preference
//! mutations write through immediately so a crash never loses more than the
//! in-flight change. A malformed slot is logged and discarded rather than
//! aborting startup.
//!
//! The same state directory holds the one-shot redirect stash used to carry
//! a deep-link path across a restart.

use std::fs;
use std::path::{Path, PathBuf};

use crate::store::User;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ============================================================================
// SessionSlot
// ============================================================================

/// The on-disk session slot: a single `session.json` file in the state
/// directory. One user at a time; signing in overwrites, signing out clears.
pub struct SessionSlot {
    path: PathBuf,
}

impl SessionSlot {
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join("session.json"),
        }
    }

    /// Load the persisted user, if any.
    ///
    /// A missing file is a normal logged-out state. A file that fails to
    /// parse is treated the same way, after a warning, and removed so the
    /// next save starts clean.
    pub fn load(&self) -> Option<User> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read session slot");
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                tracing::info!(user = %user.name, "Restored session");
                Some(user)
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Discarding malformed session slot");
                fs::remove_file(&self.path).ok();
                None
            }
        }
    }

    /// Persist the user, creating the state directory if needed.
    pub fn save(&self, user: &User) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(user)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Remove the slot. Missing file is fine.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ============================================================================
// Redirect Stash
// ============================================================================

/// Stash a path to be restored as the initial location on next start.
pub fn stash_redirect(state_dir: &Path, path: &str) -> Result<(), SessionError> {
    fs::create_dir_all(state_dir)?;
    fs::write(state_dir.join("redirect"), path)?;
    Ok(())
}

/// Consume the stashed redirect, if any. The stash is deleted on read so it
/// only ever applies once.
pub fn take_redirect(state_dir: &Path) -> Option<String> {
    let path = state_dir.join("redirect");
    let raw = fs::read_to_string(&path).ok()?;
    fs::remove_file(&path).ok();
    let raw = raw.trim();
    if raw.is_empty() {
        None
    } else {
        tracing::info!(target_path = %raw, "Consumed stashed redirect");
        Some(raw.to_string())
    }
}

// ============================================================================
// Session
// ============================================================================

/// The live session: an optional signed-in user plus the slot it persists to.
pub struct Session {
    slot: SessionSlot,
    user: Option<User>,
}

impl Session {
    /// Restore from the slot (or start logged out).
    pub fn restore(state_dir: &Path) -> Self {
        let slot = SessionSlot::new(state_dir);
        let user = slot.load();
        Self { slot, user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Sign in, persisting immediately. The user is adopted in memory even
    /// when the slot write fails; the error is returned so the caller can
    /// report it.
    pub fn login(&mut self, user: User) -> Result<(), SessionError> {
        tracing::info!(user = %user.name, "Signed in");
        let persisted = self.slot.save(&user);
        self.user = Some(user);
        persisted
    }

    /// Sign out and clear the slot.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        if let Some(user) = self.user.take() {
            tracing::info!(user = %user.name, "Signed out");
        }
        self.slot.clear()
    }

    /// True if the signed-in user has bookmarked this article.
    pub fn is_bookmarked(&self, article_id: &str) -> bool {
        self.user
            .as_ref()
            .map(|u| u.bookmarks.iter().any(|b| b == article_id))
            .unwrap_or(false)
    }

    /// The signed-in user's bookmark ids, oldest first.
    pub fn bookmarks(&self) -> &[String] {
        self.user.as_ref().map(|u| u.bookmarks.as_slice()).unwrap_or(&[])
    }

    /// Toggle a bookmark and persist the change. Returns the new bookmarked
    /// state, or `None` when logged out (the toggle is a no-op then).
    pub fn toggle_bookmark(&mut self, article_id: &str) -> Result<Option<bool>, SessionError> {
        let Some(user) = self.user.as_mut() else {
            tracing::debug!(id = %article_id, "Bookmark toggle ignored while logged out");
            return Ok(None);
        };

        let added = match user.bookmarks.iter().position(|b| b == article_id) {
            Some(idx) => {
                user.bookmarks.remove(idx);
                false
            }
            None => {
                user.bookmarks.push(article_id.to_string());
                true
            }
        };
        tracing::info!(id = %article_id, added, "Toggled bookmark");
        self.slot.save(user)?;
        Ok(Some(added))
    }

    /// Update the persisted dark-mode preference to match the active theme.
    /// No-op while logged out.
    pub fn set_dark_mode(&mut self, dark: bool) -> Result<(), SessionError> {
        let Some(user) = self.user.as_mut() else {
            return Ok(());
        };
        if user.preferences.dark_mode != dark {
            user.preferences.dark_mode = dark;
            self.slot.save(user)?;
        }
        Ok(())
    }
}
