//! Account endpoints: login, registration, and identity lookup.
//!
//! These calls never touch session state themselves; [`crate::session`]
//! applies their results.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::ApiError;
use crate::transport::{ApiRequest, Transport, decode, execute};
use crate::types::{AuthResponse, Credentials, NewAccount, User};

const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/register";
const ME_PATH: &str = "/api/auth/me";

/// Check login input before any request is made.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when email or password is blank.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), ApiError> {
    if credentials.email.trim().is_empty() || credentials.password.is_empty() {
        return Err(ApiError::Validation("Email and password are required".to_owned()));
    }
    Ok(())
}

/// Check registration input before any request is made.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] naming the first missing required field.
pub fn validate_new_account(account: &NewAccount) -> Result<(), ApiError> {
    let required = [
        ("email", account.email.trim()),
        ("password", account.password.as_str()),
        ("first_name", account.first_name.trim()),
        ("last_name", account.last_name.trim()),
    ];
    match required.into_iter().find(|(_, value)| value.is_empty()) {
        Some((field, _)) => Err(ApiError::Validation(format!("{field} is required"))),
        None => Ok(()),
    }
}

/// `POST /api/auth/login`.
///
/// # Errors
///
/// Client-side validation, transport, and server rejections (401 included,
/// which here means bad credentials rather than an expired session).
pub async fn login<T>(transport: &T, credentials: &Credentials) -> Result<AuthResponse, ApiError>
where
    T: Transport + ?Sized,
{
    validate_credentials(credentials)?;
    let body = serde_json::json!({
        "email": credentials.email.trim(),
        "password": credentials.password,
    });
    let resp = execute(transport, ApiRequest::post(LOGIN_PATH, body), "Login failed").await?;
    decode(resp, "Login failed")
}

/// `POST /api/auth/register`.
///
/// # Errors
///
/// Same as [`login`].
pub async fn register<T>(transport: &T, account: &NewAccount) -> Result<AuthResponse, ApiError>
where
    T: Transport + ?Sized,
{
    validate_new_account(account)?;
    let body = serde_json::to_value(account).map_err(|_| ApiError::Validation("Invalid registration".to_owned()))?;
    let resp = execute(transport, ApiRequest::post(REGISTER_PATH, body), "Registration failed").await?;
    decode(resp, "Registration failed")
}

/// `GET /api/auth/me` for the bearer of `token`.
///
/// # Errors
///
/// [`ApiError::Auth`] for a blank or rejected token; otherwise as [`login`].
pub async fn current_user<T>(transport: &T, token: &str) -> Result<User, ApiError>
where
    T: Transport + ?Sized,
{
    if token.trim().is_empty() {
        return Err(ApiError::signed_out());
    }
    let resp = execute(transport, ApiRequest::get(ME_PATH).with_bearer(token), "Failed to load profile").await?;
    decode(resp, "Failed to load profile")
}
