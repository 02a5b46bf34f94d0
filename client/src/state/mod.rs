//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only the session is global. Page-level state (family list, forms) is
//! owned by the page that renders it.

pub mod auth;
