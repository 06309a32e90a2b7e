//! Mock authentication.
//!
//! There is no account backend. Any well-formed credentials succeed after a
//! short artificial delay, yielding a fabricated user with a random id and
//! empty bookmarks. The delay runs on a spawned task so an impatient user
//! can dismiss the modal and cancel it.

use std::time::Duration;

use crate::store::{fabricate_id, Preferences, User};

/// Artificial latency before a sign-in "completes".
pub const AUTH_DELAY: Duration = Duration::from_millis(1000);

/// Display name granted to everyone who signs in (as opposed to registering).
pub const DEMO_USER_NAME: &str = "Demo User";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("All fields are required")]
    MissingFields,
}

/// Which form the auth modal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Register => "Create Account",
        }
    }
}

/// Form contents submitted from the auth modal.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Field-presence check. Login needs email and password; registration
    /// additionally needs a display name.
    pub fn validate(&self) -> Result<(), AuthError> {
        let name_ok = self.mode == AuthMode::Login || !self.name.trim().is_empty();
        if name_ok && !self.email.trim().is_empty() && !self.password.trim().is_empty() {
            Ok(())
        } else {
            Err(AuthError::MissingFields)
        }
    }
}

/// Build the user a successful sign-in produces. The password is accepted
/// unchecked and never stored.
fn fabricate_user(credentials: &Credentials) -> User {
    let name = match credentials.mode {
        AuthMode::Login => DEMO_USER_NAME.to_string(),
        AuthMode::Register => credentials.name.trim().to_string(),
    };
    User {
        id: fabricate_id(),
        name,
        email: credentials.email.trim().to_string(),
        avatar: None,
        bookmarks: Vec::new(),
        preferences: Preferences::default(),
    }
}

/// Run the mock sign-in: validate, wait out the artificial delay, fabricate
/// the user. Callers spawn this and may abort the task to cancel.
pub async fn authenticate(credentials: Credentials, delay: Duration) -> Result<User, AuthError> {
    credentials.validate()?;
    tokio::time::sleep(delay).await;
    let user = fabricate_user(&credentials);
    tracing::info!(user = %user.name, email = %user.email, "Mock sign-in succeeded");
    Ok(user)
}
