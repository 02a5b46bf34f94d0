//! Authenticated client for the family resource.
//!
//! Ownership is implied by the bearer token. Requests never carry a user
//! id and responses are not filtered client-side. There is no cache: every
//! [`FamilyClient::list`] is a fresh read.

#[cfg(test)]
#[path = "family_test.rs"]
mod family_test;

use crate::error::ApiError;
use crate::transport::{ApiRequest, Transport, decode, execute};
use crate::types::{Family, NewFamily};

const FAMILY_PATH: &str = "/api/family";
const LIST_FALLBACK: &str = "Failed to load families";
const CREATE_FALLBACK: &str = "Failed to register family";
pub const FAMILY_NAME_REQUIRED: &str = "Family name is required";

/// Borrowing client; cheap to build per call.
pub struct FamilyClient<'a, T: ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> FamilyClient<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Families owned by the bearer of `token`, in server order.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] without touching the network when `token` is
    /// missing or blank; otherwise the mapped response or transport failure.
    pub async fn list(&self, token: Option<&str>) -> Result<Vec<Family>, ApiError> {
        let token = require_token(token)?;
        let req = ApiRequest::get(FAMILY_PATH).with_bearer(token);
        let body = execute(self.transport, req, LIST_FALLBACK).await?;
        decode(body, LIST_FALLBACK)
    }

    /// Register a family. The caller re-fetches with [`Self::list`] on success.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] for a missing token and [`ApiError::Validation`]
    /// for a blank family name, both before any request; otherwise the
    /// mapped response or transport failure.
    pub async fn create(&self, token: Option<&str>, fields: &NewFamily) -> Result<(), ApiError> {
        let token = require_token(token)?;
        validate(fields)?;
        let body = serde_json::to_value(trimmed(fields)).map_err(|_| ApiError::Validation(CREATE_FALLBACK.to_owned()))?;
        let req = ApiRequest::post(FAMILY_PATH, body).with_bearer(token);
        execute(self.transport, req, CREATE_FALLBACK).await?;
        tracing::info!("family registered");
        Ok(())
    }
}

/// Client-side check run before any create request.
///
/// # Errors
///
/// [`ApiError::Validation`] when `family_name` is blank.
pub fn validate(fields: &NewFamily) -> Result<(), ApiError> {
    if fields.family_name.trim().is_empty() {
        return Err(ApiError::Validation(FAMILY_NAME_REQUIRED.to_owned()));
    }
    Ok(())
}

fn require_token(token: Option<&str>) -> Result<&str, ApiError> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(ApiError::signed_out)
}

fn trimmed(fields: &NewFamily) -> NewFamily {
    NewFamily {
        family_name: fields.family_name.trim().to_owned(),
        address: fields.address.trim().to_owned(),
        city: fields.city.trim().to_owned(),
        state: fields.state.trim().to_owned(),
        zip_code: fields.zip_code.trim().to_owned(),
    }
}
