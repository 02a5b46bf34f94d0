//! Wire DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! The server emits integer ids and `Numeric` prices that may serialize as
//! strings, so ids are normalized to `String` and prices to `f64` at decode
//! time. Family payloads carry no owner field in either direction.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned user identifier.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl User {
    /// First and last name joined for display.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// Login credentials for `POST /api/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Account fields for `POST /api/auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Successful login/registration response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: User,
}

/// A registered family owned by the bearer of the session token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Family {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub family_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    /// ISO 8601 creation timestamp assigned by the server.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Family {
    /// "City, ST 12345" style location line, or `None` when nothing is known.
    #[must_use]
    pub fn locality(&self) -> Option<String> {
        let city = self.city.as_deref().unwrap_or("").trim();
        let state = self.state.as_deref().unwrap_or("").trim();
        let zip = self.zip_code.as_deref().unwrap_or("").trim();
        let region = [state, zip]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let line = match (city.is_empty(), region.is_empty()) {
            (true, true) => return None,
            (false, true) => city.to_owned(),
            (true, false) => region,
            (false, false) => format!("{city}, {region}"),
        };
        Some(line)
    }
}

/// Form input for `POST /api/family`.
///
/// Blank optional fields are dropped from the JSON body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewFamily {
    pub family_name: String,
    #[serde(skip_serializing_if = "is_blank")]
    pub address: String,
    #[serde(skip_serializing_if = "is_blank")]
    pub city: String,
    #[serde(skip_serializing_if = "is_blank")]
    pub state: String,
    #[serde(skip_serializing_if = "is_blank")]
    pub zip_code: String,
}

/// A sports program from the public catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub age_range: Option<String>,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sport_type: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
}

/// Unauthenticated sign-up for a single program via `POST /api/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProgramRegistration {
    /// Parent name.
    pub name: String,
    /// Child name.
    pub child: String,
    pub email: String,
    #[serde(rename = "programId")]
    pub program_id: String,
}

#[allow(clippy::ptr_arg)]
fn is_blank(value: &String) -> bool {
    value.trim().is_empty()
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64()),
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid price: {s}"))),
        Some(other) => Err(D::Error::custom(format!("invalid price: {other}"))),
    }
}
