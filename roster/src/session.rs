//! Session state: who is signed in and with which bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Session`] is the plain value every view reads. The browser holds it in a
//! Leptos signal and calls [`restore`] and [`persist`] around its transitions
//! to keep a [`TokenStore`] in step.
//!
//! Lifecycle: `restoring` (loading) -> `anonymous` | `authenticated`, then
//! `establish` / `clear` move between the two terminal states.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::auth;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{AuthResponse, User};

/// Current authentication state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
    loading: bool,
}

impl Session {
    /// State before a persisted session has been looked at.
    #[must_use]
    pub fn restoring() -> Self {
        Self { token: None, user: None, loading: true }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn authenticated(token: &str, user: User) -> Self {
        Self { token: Some(token.to_owned()), user: Some(user), loading: false }
    }

    /// Bearer token, if one is held and non-empty.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// True only while a persisted session is being restored.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Resolved and holding a usable token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.token().is_some()
    }

    /// Adopt the result of a successful login or registration.
    pub fn establish(&mut self, auth: AuthResponse) {
        tracing::info!(user_id = %auth.user.id, "session established");
        self.token = Some(auth.token);
        self.user = Some(auth.user);
        self.loading = false;
    }

    /// Drop token and identity. Idempotent.
    pub fn clear(&mut self) {
        if self.token.is_some() {
            tracing::info!("session cleared");
        }
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    /// Leave the restoring state with whatever survived revalidation.
    pub fn finish_restore(&mut self, restored: Option<PersistedSession>) {
        match restored {
            Some(saved) => {
                self.token = Some(saved.token);
                self.user = Some(saved.user);
            }
            None => {
                self.token = None;
                self.user = None;
            }
        }
        self.loading = false;
    }

    /// Snapshot suitable for [`TokenStore::save`].
    #[must_use]
    pub fn persisted(&self) -> Option<PersistedSession> {
        let token = self.token()?;
        let user = self.user.clone()?;
        Some(PersistedSession { token: token.to_owned(), user })
    }
}

/// What survives a page reload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: String,
    pub user: User,
}

/// Storage for the session across reloads.
pub trait TokenStore {
    fn load(&self) -> Option<PersistedSession>;
    fn save(&self, session: &PersistedSession);
    fn clear(&self);
}

/// Re-check a persisted session against `GET /api/auth/me`.
///
/// A rejected token drops the session. A transport or server failure keeps
/// the saved identity so a flaky network does not sign the user out.
pub async fn revalidate<T>(transport: &T, saved: PersistedSession) -> Option<PersistedSession>
where
    T: Transport + ?Sized,
{
    match auth::current_user(transport, &saved.token).await {
        Ok(user) => Some(PersistedSession { token: saved.token, user }),
        Err(ApiError::Auth(_)) => {
            tracing::info!("persisted session rejected by server");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "session revalidation failed; keeping saved identity");
            Some(saved)
        }
    }
}

/// Load the saved session from `storage`, revalidate it, and write back
/// whatever survived. No request is made when nothing was saved.
pub async fn restore<T, S>(transport: &T, storage: &S) -> Option<PersistedSession>
where
    T: Transport + ?Sized,
    S: TokenStore + ?Sized,
{
    let restored = match storage.load() {
        Some(saved) => revalidate(transport, saved).await,
        None => None,
    };
    match &restored {
        Some(saved) => storage.save(saved),
        None => storage.clear(),
    }
    restored
}

/// Mirror `session` into `storage`: saved while signed in, cleared otherwise.
pub fn persist<S>(storage: &S, session: &Session)
where
    S: TokenStore + ?Sized,
{
    match session.persisted() {
        Some(saved) => storage.save(&saved),
        None => storage.clear(),
    }
}
