//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` adapts `gloo-net` to `roster::Transport`; request shapes and error
//! mapping come from `roster`.

pub mod api;
