//! # client
//!
//! Leptos + WASM frontend for the SportsID registration app.
//!
//! This crate contains pages, components, the session context, and the
//! browser implementations of `roster`'s `Transport` and `TokenStore`.
//! All request shaping, validation, and state transitions live in `roster`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
