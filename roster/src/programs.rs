//! Public program catalog: listing, lookup, filtering, and sign-up.
//!
//! None of these calls carry a bearer token.

#[cfg(test)]
#[path = "programs_test.rs"]
mod programs_test;

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::error::ApiError;
use crate::transport::{ApiRequest, Transport, decode, execute};
use crate::types::{Program, ProgramRegistration};

const PROGRAMS_PATH: &str = "/api/programs";
const REGISTER_PATH: &str = "/api/register";

/// Three independent facets; a blank facet matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramFilter {
    /// Substring of name, description, or organization.
    pub search: String,
    /// Exact sport type.
    pub sport_type: String,
    /// Substring of location.
    pub location: String,
}

impl ProgramFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.sport_type.trim().is_empty() && self.location.trim().is_empty()
    }

    #[must_use]
    pub fn matches(&self, program: &Program) -> bool {
        let search = needle(&self.search);
        let sport = needle(&self.sport_type);
        let location = needle(&self.location);

        let search_ok = search.is_empty()
            || [Some(program.name.as_str()), program.description.as_deref(), program.organization.as_deref()]
                .into_iter()
                .flatten()
                .any(|text| text.to_lowercase().contains(&search));
        let sport_ok = sport.is_empty() || program.sport_type.as_deref().is_some_and(|s| s.trim().to_lowercase() == sport);
        let location_ok = location.is_empty()
            || program
                .location
                .as_deref()
                .is_some_and(|l| l.to_lowercase().contains(&location));

        search_ok && sport_ok && location_ok
    }

    /// Matching programs in their original order.
    #[must_use]
    pub fn apply<'a>(&self, programs: &'a [Program]) -> Vec<&'a Program> {
        programs.iter().filter(|p| self.matches(p)).collect()
    }
}

fn needle(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Sorted, de-duplicated sport types for the filter dropdown.
#[must_use]
pub fn sport_types(programs: &[Program]) -> Vec<String> {
    programs
        .iter()
        .filter_map(|p| p.sport_type.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// `GET /api/programs`.
///
/// # Errors
///
/// Transport failures and non-success responses.
pub async fn list_programs<T>(transport: &T) -> Result<Vec<Program>, ApiError>
where
    T: Transport + ?Sized,
{
    let body = execute(transport, ApiRequest::get(PROGRAMS_PATH), "Failed to load programs").await?;
    decode(body, "Failed to load programs")
}

/// `GET /api/programs/:id`.
///
/// # Errors
///
/// [`ApiError::Validation`] for a blank id, then transport failures and
/// non-success responses (404 included).
pub async fn get_program<T>(transport: &T, id: &str) -> Result<Program, ApiError>
where
    T: Transport + ?Sized,
{
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::Validation("Program id is required".to_owned()));
    }
    let path = format!("{PROGRAMS_PATH}/{}", encode_segment(id));
    let body = execute(transport, ApiRequest::get(path), "Program not found").await?;
    decode(body, "Program not found")
}

/// Percent-encode one path segment; only RFC 3986 unreserved bytes pass.
fn encode_segment(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => encoded.push(char::from(byte)),
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}

/// Check a program sign-up before sending it.
///
/// # Errors
///
/// [`ApiError::Validation`] when parent name, child name, or email is blank.
pub fn validate_registration(registration: &ProgramRegistration) -> Result<(), ApiError> {
    let fields = [&registration.name, &registration.child, &registration.email];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ApiError::Validation("Please fill in all fields".to_owned()));
    }
    Ok(())
}

/// `POST /api/register`: unauthenticated sign-up for one program.
///
/// # Errors
///
/// Client-side validation, transport failures, and non-success responses.
pub async fn register_for_program<T>(transport: &T, registration: &ProgramRegistration) -> Result<(), ApiError>
where
    T: Transport + ?Sized,
{
    validate_registration(registration)?;
    let body = serde_json::json!({
        "name": registration.name.trim(),
        "child": registration.child.trim(),
        "email": registration.email.trim(),
        "programId": registration.program_id,
    });
    execute(transport, ApiRequest::post(REGISTER_PATH, body), "Registration failed").await?;
    tracing::info!(program_id = %registration.program_id, "program registration submitted");
    Ok(())
}
