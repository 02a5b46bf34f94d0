//! Error taxonomy shared by every REST operation.
//!
//! ERROR HANDLING
//! ==============
//! `Auth` always forces the session to sign out. `Validation` and `Fetch`
//! are shown to the user and leave the session alone. `Network` means no
//! response was observed at all (including timeouts).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure reported by a [`crate::Transport`] before any HTTP status exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or the connection dropped.
    #[error("{0}")]
    Unreachable(String),
    /// No response arrived within the configured timeout.
    #[error("request timed out after {0}s")]
    Timeout(u64),
}

/// Error returned by every client operation in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure: no response was received.
    #[error("network error: {0}")]
    Network(#[from] TransportError),
    /// Missing, invalid, or expired token.
    #[error("{0}")]
    Auth(String),
    /// Rejected input, either client-side or a 400 from the server.
    #[error("{0}")]
    Validation(String),
    /// Any other unsuccessful response.
    #[error("{message}")]
    Fetch { status: u16, message: String },
}

impl ApiError {
    /// Returned when an authenticated call is attempted without a token.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::Auth("You are not signed in.".to_owned())
    }

    /// Whether this error must transition the session to signed-out.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Map a non-success status and JSON body into the taxonomy.
    ///
    /// The server message is taken from `error`, then `message`, then the
    /// supplied fallback.
    #[must_use]
    pub fn from_status(status: u16, body: &Value, fallback: &str) -> Self {
        let message = server_message(body).unwrap_or_else(|| fallback.to_owned());
        match status {
            401 => Self::Auth(message),
            400 => Self::Validation(message),
            _ => Self::Fetch { status, message },
        }
    }
}

fn server_message(body: &Value) -> Option<String> {
    ["error", "message"]
        .into_iter()
        .filter_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_owned)
}
