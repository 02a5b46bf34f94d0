//! Shared client core for the SportsID registration app.
//!
//! This crate owns everything both front ends (`client` in the browser and
//! `cli` on the terminal) agree on: wire types, the error taxonomy, the
//! session state machine, the auth gate, and the REST clients for families
//! and programs. It never performs I/O itself; callers plug in a
//! [`Transport`].
//!
//! ARCHITECTURE
//! ============
//! `session` + `gate` decide who may see what, `family` / `programs` / `auth`
//! translate operations into [`ApiRequest`]s, `form` and `dashboard` hold the
//! view-level state machines that compose them.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod family;
pub mod form;
pub mod gate;
pub mod programs;
pub mod session;
pub mod transport;
pub mod types;

#[cfg(test)]
#[path = "test_helpers.rs"]
pub(crate) mod test_helpers;

pub use config::ApiConfig;
pub use error::{ApiError, TransportError};
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
