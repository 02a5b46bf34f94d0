//! Family registration form state machine.
//!
//! ```text
//! Idle --submit--> Submitting --ok--> Success (terminal)
//!   ^                  |
//!   +--edit/retry-- Failed <--err--+
//! ```
//!
//! At most one create is in flight per form: [`FamilyForm::begin_submit`]
//! refuses while `Submitting`, and the view disables the button from
//! [`FamilyForm::can_submit`].

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::error::ApiError;
use crate::family::{self, FamilyClient};
use crate::transport::Transport;
use crate::types::NewFamily;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(String),
}

/// Editable fields of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FamilyField {
    FamilyName,
    Address,
    City,
    State,
    ZipCode,
}

/// Why a submit attempt was refused before reaching the network.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a registration is already in progress")]
    InFlight,
    #[error("this registration was already submitted")]
    Completed,
    #[error("{0}")]
    Invalid(String),
}

/// What the owner of the form must do after a submission resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fire `on_success` (refresh the list), then `on_close`.
    Registered,
    /// Error is displayed in the form; input is kept.
    Failed(String),
    /// Token rejected: the session must sign out.
    SignedOut(ApiError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FamilyForm {
    fields: NewFamily,
    state: SubmitState,
}

impl FamilyForm {
    #[must_use]
    pub fn fields(&self) -> &NewFamily {
        &self.fields
    }

    #[must_use]
    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn field(&self, field: FamilyField) -> &str {
        match field {
            FamilyField::FamilyName => &self.fields.family_name,
            FamilyField::Address => &self.fields.address,
            FamilyField::City => &self.fields.city,
            FamilyField::State => &self.fields.state,
            FamilyField::ZipCode => &self.fields.zip_code,
        }
    }

    /// Update a field. Ignored while submitting; clears a prior failure.
    pub fn set(&mut self, field: FamilyField, value: String) {
        if matches!(self.state, SubmitState::Submitting | SubmitState::Success) {
            return;
        }
        let slot = match field {
            FamilyField::FamilyName => &mut self.fields.family_name,
            FamilyField::Address => &mut self.fields.address,
            FamilyField::City => &mut self.fields.city,
            FamilyField::State => &mut self.fields.state,
            FamilyField::ZipCode => &mut self.fields.zip_code,
        };
        *slot = value;
        if matches!(self.state, SubmitState::Failed(_)) {
            self.state = SubmitState::Idle;
        }
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self.state, SubmitState::Idle | SubmitState::Failed(_)) && !self.fields.family_name.trim().is_empty()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { "Registering..." } else { "Register Family" }
    }

    /// Move to `Submitting` and hand back the payload to send.
    ///
    /// A `Failed` form retries through `Idle`.
    ///
    /// # Errors
    ///
    /// Refuses while a submission is in flight, after success, or when the
    /// family name is blank. A blank name also moves the form to `Failed`.
    pub fn begin_submit(&mut self) -> Result<NewFamily, SubmitRejected> {
        match self.state {
            SubmitState::Submitting => return Err(SubmitRejected::InFlight),
            SubmitState::Success => return Err(SubmitRejected::Completed),
            SubmitState::Failed(_) => self.state = SubmitState::Idle,
            SubmitState::Idle => {}
        }
        if let Err(e) = family::validate(&self.fields) {
            let message = e.to_string();
            self.state = SubmitState::Failed(message.clone());
            return Err(SubmitRejected::Invalid(message));
        }
        self.state = SubmitState::Submitting;
        Ok(self.fields.clone())
    }

    /// Record a resolved submission. Fields are kept on failure.
    pub fn settle(&mut self, outcome: &SubmitOutcome) {
        self.state = match outcome {
            SubmitOutcome::Registered => SubmitState::Success,
            SubmitOutcome::Failed(message) => SubmitState::Failed(message.clone()),
            SubmitOutcome::SignedOut(e) => SubmitState::Failed(e.to_string()),
        };
    }
}

impl SubmitOutcome {
    /// Classify a create result. Depends on nothing but the result, so the
    /// owner can act on it after the form itself is gone.
    #[must_use]
    pub fn from_result(result: Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self::Registered,
            Err(e) if e.is_auth() => Self::SignedOut(e),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Send the payload from [`FamilyForm::begin_submit`] and classify the reply.
pub async fn send<T>(transport: &T, token: Option<&str>, fields: &NewFamily) -> SubmitOutcome
where
    T: Transport + ?Sized,
{
    SubmitOutcome::from_result(FamilyClient::new(transport).create(token, fields).await)
}
