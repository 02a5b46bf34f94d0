//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod about;
pub mod auth;
pub mod dashboard;
pub mod features;
pub mod landing;
pub mod program_detail;
pub mod programs;
