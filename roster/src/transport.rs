//! Transport seam between the client core and an HTTP stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build implements [`Transport`] over `gloo-net`, the CLI over
//! `reqwest`, and tests over a recording mock. Everything above this module
//! only ever sees [`ApiRequest`] / [`ApiResponse`].

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, TransportError};

/// HTTP verbs used by the REST surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A request against an API path relative to the configured base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute path, e.g. `/api/family`.
    pub path: String,
    /// Bearer token for the `Authorization` header, if any.
    pub bearer: Option<String>,
    /// JSON body for `POST` requests.
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), bearer: None, body: None }
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, path: path.into(), bearer: None, body: Some(body) }
    }

    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }

    /// `Authorization` header value, if a bearer token is attached.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// A completed HTTP exchange. Non-JSON bodies decode to `Value::Null`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse a raw response body, tolerating empty or non-JSON text.
    #[must_use]
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = serde_json::from_str(text).unwrap_or(Value::Null);
        Self { status, body }
    }
}

/// Sends one request and reports the response or a transport failure.
///
/// `?Send` because browser futures are bound to the UI thread.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Perform the HTTP exchange.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response was received, including
    /// when the implementation's timeout expires.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Send `request` and return the JSON body of a successful response.
///
/// # Errors
///
/// Transport failures become [`ApiError::Network`]; non-2xx statuses are
/// mapped through [`ApiError::from_status`] with `fallback` as the message.
pub async fn execute<T>(transport: &T, request: ApiRequest, fallback: &str) -> Result<Value, ApiError>
where
    T: Transport + ?Sized,
{
    let method = request.method.as_str();
    let path = request.path.clone();
    tracing::debug!(%method, %path, authenticated = request.bearer.is_some(), "api request");

    let response = transport.send(request).await.map_err(|e| {
        tracing::warn!(%method, %path, error = %e, "api transport failure");
        ApiError::Network(e)
    })?;

    if response.is_success() {
        return Ok(response.body);
    }
    tracing::warn!(%method, %path, status = response.status, "api request rejected");
    Err(ApiError::from_status(response.status, &response.body, fallback))
}

/// Decode a success body into `D`.
///
/// # Errors
///
/// An undecodable body is reported as [`ApiError::Fetch`] with status 200.
pub fn decode<D: DeserializeOwned>(body: Value, fallback: &str) -> Result<D, ApiError> {
    serde_json::from_value(body).map_err(|e| {
        tracing::warn!(error = %e, "api response decode failed");
        ApiError::Fetch { status: 200, message: fallback.to_owned() }
    })
}
