//! API endpoint configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Where the REST API lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS)
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            timeout: Duration::from_secs(timeout_secs.max(1)),
        }
    }

    /// Build from environment variables.
    ///
    /// Optional:
    /// - `ROSTER_API_URL`: default `http://localhost:5000`
    /// - `ROSTER_API_TIMEOUT_SECS`: default 15
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("ROSTER_API_URL").ok();
        let timeout = std::env::var("ROSTER_API_TIMEOUT_SECS").ok();
        Self::from_parts(base_url.as_deref(), timeout.as_deref())
    }

    /// Build from optional raw values, falling back to defaults for absent,
    /// blank, or unparseable input.
    #[must_use]
    pub fn from_parts(base_url: Option<&str>, timeout_secs: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        let timeout = timeout_secs
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::new(base_url, timeout)
    }

    /// Join an absolute API path onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout.as_secs()
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
