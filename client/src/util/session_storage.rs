//! Browser `sessionStorage` persistence for the signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives for the browser tab only. These helpers centralize the
//! csr-only web-sys glue so the session context stays target-agnostic.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use roster::session::{PersistedSession, TokenStore};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the persisted `{token, user}` pair.
pub const SESSION_KEY: &str = "sportsid.session";

/// Load a JSON value from `sessionStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        decode(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `sessionStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("sessionStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `sessionStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

/// Decode a stored value, treating corrupt entries as absent.
#[cfg(any(test, feature = "csr"))]
fn decode<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

/// `roster::session::TokenStore` backed by `sessionStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<PersistedSession> {
        load_json::<PersistedSession>(SESSION_KEY).filter(|saved| !saved.token.trim().is_empty())
    }

    fn save(&self, session: &PersistedSession) {
        save_json(SESSION_KEY, session);
    }

    fn clear(&self) {
        remove(SESSION_KEY);
    }
}
