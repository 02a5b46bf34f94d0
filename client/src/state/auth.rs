//! Session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` and read by the auth gate, nav bar, and pages.
//! The inner signal is private: consumers get a read-only view, and every
//! mutation goes through `establish`, `logout`, `sign_out`, or `restore`,
//! which also keep `sessionStorage` in step.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use roster::ApiError;
use roster::gate::{self, GateDecision};
use roster::session::{self, Session};
use roster::types::{AuthResponse, User};

use crate::util::session_storage::BrowserTokenStore;

/// Handle to the app-wide session signal.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    session: RwSignal<Session>,
}

impl SessionContext {
    /// Create a context in the restoring state and provide it to children.
    pub fn provide() -> Self {
        let ctx = Self { session: RwSignal::new(Session::restoring()) };
        provide_context(ctx);
        ctx
    }

    /// # Panics
    ///
    /// Panics when called outside the `App` tree.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Read-only view of the session.
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// Gate decision, tracked.
    pub fn decision(&self) -> GateDecision {
        self.session.with(gate::decide)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user().cloned())
    }

    /// Current token without subscribing the caller.
    pub fn token_untracked(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token().map(str::to_owned))
    }

    /// Rehydrate from `sessionStorage`, revalidating the token in the browser.
    pub fn restore(self) {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let transport = crate::net::api::transport();
            let restored = session::restore(&transport, &BrowserTokenStore).await;
            self.session.update(|s| s.finish_restore(restored));
        });

        #[cfg(not(feature = "csr"))]
        self.session.update(|s| s.finish_restore(session::TokenStore::load(&BrowserTokenStore)));
    }

    /// Adopt a successful login or registration.
    pub fn establish(self, auth: AuthResponse) {
        log::info!("signed in as user {}", auth.user.id);
        self.session.update(|s| s.establish(auth));
        self.persist();
    }

    /// User-initiated sign out. Idempotent.
    pub fn logout(self) {
        self.session.update(Session::clear);
        self.persist();
    }

    /// Forced sign out after the server rejected the token.
    pub fn sign_out(self, cause: &ApiError) {
        log::warn!("signing out: {cause}");
        self.logout();
    }

    fn persist(self) {
        self.session.with_untracked(|s| session::persist(&BrowserTokenStore, s));
    }
}

/// Display name for the nav bar and dashboard header.
pub fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) if !user.first_name.trim().is_empty() => format!("Welcome, {}", user.first_name.trim()),
        _ => "Welcome".to_owned(),
    }
}
