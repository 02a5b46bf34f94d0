//! Route guard decision for protected views.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::session::Session;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// What a protected view should do for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session still restoring: show a placeholder, do not redirect yet.
    Pending,
    /// Signed out: navigate to the login entry point.
    Redirect(&'static str),
    /// Signed in: render the protected content unchanged.
    Render,
}

impl GateDecision {
    #[must_use]
    pub fn renders(self) -> bool {
        matches!(self, Self::Render)
    }
}

/// Pure function of session state.
#[must_use]
pub fn decide(session: &Session) -> GateDecision {
    if session.is_loading() {
        GateDecision::Pending
    } else if session.is_authenticated() {
        GateDecision::Render
    } else {
        GateDecision::Redirect(LOGIN_PATH)
    }
}
