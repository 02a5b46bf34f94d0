//! Browser transport for the REST API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` timeout.
//! Native builds (tests, tooling): every request fails as unreachable, since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Only transport-level failures are produced here. Status mapping happens in
//! `roster::transport::execute`, so pages receive the shared `ApiError`
//! taxonomy regardless of target.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use roster::{ApiConfig, ApiRequest, ApiResponse, Transport, TransportError};

/// Base URL and timeout baked in at compile time.
///
/// Set `ROSTER_API_URL` / `ROSTER_API_TIMEOUT_SECS` when building the WASM
/// bundle; unset values fall back to the local development API.
#[must_use]
pub fn api_config() -> ApiConfig {
    ApiConfig::from_parts(option_env!("ROSTER_API_URL"), option_env!("ROSTER_API_TIMEOUT_SECS"))
}

/// Transport for the current page.
#[must_use]
pub fn transport() -> BrowserTransport {
    BrowserTransport::new(api_config())
}

#[cfg(any(test, feature = "csr"))]
fn send_failed_message(detail: &str) -> String {
    format!("request failed: {detail}")
}

/// `roster::Transport` over the browser Fetch API.
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    config: ApiConfig,
}

impl BrowserTransport {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};
            use gloo_net::http::Request;

            let url = self.config.url(&request.path);
            let mut builder = match request.method {
                roster::Method::Get => Request::get(&url),
                roster::Method::Post => Request::post(&url),
            };
            if let Some(auth) = request.authorization() {
                builder = builder.header("Authorization", &auth);
            }
            let built = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Unreachable(send_failed_message(&e.to_string())))?;

            let send = Box::pin(built.send());
            let deadline = Box::pin(gloo_timers::future::sleep(self.config.timeout));
            match select(send, deadline).await {
                Either::Left((result, _)) => {
                    let resp = result.map_err(|e| TransportError::Unreachable(send_failed_message(&e.to_string())))?;
                    let status = resp.status();
                    let text = resp.text().await.unwrap_or_default();
                    Ok(ApiResponse::from_text(status, &text))
                }
                Either::Right(_) => {
                    log::warn!("{} {} timed out", request.method.as_str(), request.path);
                    Err(TransportError::Timeout(self.config.timeout_secs()))
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::Unreachable("not available outside the browser".to_owned()))
        }
    }
}
