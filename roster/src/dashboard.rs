//! Dashboard family list: loading, errors, and refresh-after-write.
//!
//! DESIGN
//! ======
//! The list is never patched locally after a registration. A successful
//! create is followed by a fresh `list()` issued only once the create
//! response has been observed, so the last server read always wins.
//! Reads can overlap (mount plus post-create refresh); each one carries a
//! [`LoadTicket`] and only the most recently issued ticket is applied.
//! [`DashboardState`] tracks its own `loading`/`error`, separate from the
//! session's restoring flag.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::error::ApiError;
use crate::types::Family;

pub const EMPTY_MESSAGE: &str = "No family registrations yet.";

/// Identifies one `list()` read issued through [`DashboardState::begin_load`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Family list state as rendered by the dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    families: Vec<Family>,
    loading: bool,
    loaded: bool,
    error: Option<String>,
    generation: u64,
}

/// What the family list area should show.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Families(&'a [Family]),
    /// Last good list plus the error from a later failed refresh.
    Stale { families: &'a [Family], error: &'a str },
}

impl DashboardState {
    #[must_use]
    pub fn families(&self) -> &[Family] {
        &self.families
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a read. Any ticket handed out earlier is superseded.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        LoadTicket(self.generation)
    }

    /// Apply the `list()` result for `ticket`.
    ///
    /// Results for superseded tickets are dropped. Returns the error when it
    /// is an auth failure so the caller can sign the session out. Other
    /// failures keep the previously loaded families.
    pub fn apply(&mut self, ticket: LoadTicket, result: Result<Vec<Family>, ApiError>) -> Option<ApiError> {
        if ticket.0 != self.generation {
            tracing::debug!(ticket = ticket.0, latest = self.generation, "dropping superseded family list");
            return None;
        }
        self.loading = false;
        match result {
            Ok(families) => {
                self.families = families;
                self.loaded = true;
                self.error = None;
                None
            }
            Err(e) if e.is_auth() => {
                self.reset();
                Some(e)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Forget everything; used when the session ends. Outstanding tickets
    /// stay superseded.
    pub fn reset(&mut self) {
        *self = Self { generation: self.generation, ..Self::default() };
    }

    #[must_use]
    pub fn view(&self) -> ListView<'_> {
        if self.loading && !self.loaded {
            return ListView::Loading;
        }
        match (&self.error, self.families.is_empty()) {
            (Some(error), true) => ListView::Error(error),
            (Some(error), false) => ListView::Stale { families: &self.families, error },
            (None, true) => ListView::Empty,
            (None, false) => ListView::Families(&self.families),
        }
    }
}
