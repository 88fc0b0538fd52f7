//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the nav bar user menu, and the login page all read and write
//! the session through `SessionAccess`. `App` creates one `SessionContext`
//! and hands it down through Leptos context; nothing reaches for a global.
//!
//! Login is a local stub: credentials are shape-checked and accepted. There is
//! no backend and nothing survives a reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity shown in the user menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
}

/// One signed-in period, from login until logout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub user: SessionUser,
}

/// Raw values from the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), password: password.into() }
    }

    /// Trim and shape-check the form values, yielding the user to sign in.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails its check.
    pub fn validate(&self) -> Result<SessionUser, LoginError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(LoginError::MissingName);
        }
        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(LoginError::InvalidEmail(email.to_owned()));
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingPassword);
        }
        Ok(SessionUser { name: name.to_owned(), email: email.to_owned() })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Enter your name.")]
    MissingName,
    #[error("'{0}' is not a valid email address.")]
    InvalidEmail(String),
    #[error("Enter a password.")]
    MissingPassword,
    #[error("session is no longer available")]
    SessionClosed,
}

/// Read/update interface over whichever session holder is in scope.
pub trait SessionAccess {
    fn current_user(&self) -> Option<SessionUser>;

    /// Replace any existing session with one for the credential's user.
    ///
    /// # Errors
    ///
    /// Fails when the credentials do not pass `Credentials::validate`.
    fn login(&mut self, credentials: &Credentials) -> Result<SessionUser, LoginError>;

    fn logout(&mut self);

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

/// Plain session holder. At most one session is active at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    session: Option<Session>,
}

impl SessionStore {
    #[cfg(test)]
    pub(crate) fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

impl SessionAccess for SessionStore {
    fn current_user(&self) -> Option<SessionUser> {
        self.session.as_ref().map(|s| s.user.clone())
    }

    fn login(&mut self, credentials: &Credentials) -> Result<SessionUser, LoginError> {
        let user = credentials.validate().inspect_err(|e| {
            log::warn!("login rejected: {e}");
        })?;
        let session = Session { id: Uuid::new_v4(), user: user.clone() };
        log::info!("session {} started for {}", session.id, user.email);
        self.session = Some(session);
        Ok(user)
    }

    fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!("session {} ended for {}", session.id, session.user.email);
        }
    }

    fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Reactive handle to the app's `SessionStore`, provided via context.
///
/// Reads through this handle are tracked, so guards and menus re-render when
/// the session changes.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    store: RwSignal<SessionStore>,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        Self { store: RwSignal::new(store) }
    }
}

impl SessionAccess for SessionContext {
    fn current_user(&self) -> Option<SessionUser> {
        self.store.with(SessionStore::current_user)
    }

    fn login(&mut self, credentials: &Credentials) -> Result<SessionUser, LoginError> {
        self.store
            .try_update(|store| store.login(credentials))
            .unwrap_or(Err(LoginError::SessionClosed))
    }

    fn logout(&mut self) {
        self.store.update(SessionStore::logout);
    }

    fn is_authenticated(&self) -> bool {
        self.store.with(SessionStore::is_authenticated)
    }
}
