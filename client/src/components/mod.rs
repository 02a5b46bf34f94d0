//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from Leptos context and report results to
//! their parent page through callbacks.

pub mod family_card;
pub mod family_registration;
pub mod nav_bar;
pub mod program_card;
