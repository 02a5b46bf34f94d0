//! Recording transport and fixtures shared by unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::{Value, json};

use crate::error::TransportError;
use crate::session::{PersistedSession, TokenStore};
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// In-memory [`TokenStore`] standing in for `sessionStorage`.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<PersistedSession>>,
}

impl MemoryTokenStore {
    pub fn with(session: PersistedSession) -> Self {
        Self { slot: Mutex::new(Some(session)) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<PersistedSession> {
        self.slot.lock().expect("token slot").clone()
    }

    fn save(&self, session: &PersistedSession) {
        *self.slot.lock().expect("token slot") = Some(session.clone());
    }

    fn clear(&self) {
        *self.slot.lock().expect("token slot") = None;
    }
}

/// Replays queued responses in order and records every request it sees.
///
/// An empty queue answers with a transport failure so unexpected calls
/// surface as test failures instead of hanging.
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self { responses: Mutex::new(VecDeque::new()), requests: Mutex::new(Vec::new()) }
    }

    pub fn respond(self, status: u16, body: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(self, error: TransportError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn push(&self, status: u16, body: Value) {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse::new(status, body)));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|r| format!("{} {}", r.method.as_str(), r.path))
            .collect()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Unreachable("no mock response queued".to_owned())))
    }
}

pub fn user_json() -> Value {
    json!({
        "id": 1,
        "email": "jane@example.com",
        "first_name": "Jane",
        "last_name": "Smith",
        "phone": "512-555-0100"
    })
}

pub fn auth_json(token: &str) -> Value {
    json!({ "message": "Login successful", "access_token": token, "user": user_json() })
}

pub fn family_json(id: i64, name: &str, city: Option<&str>) -> Value {
    json!({
        "id": id,
        "family_name": name,
        "address": null,
        "city": city,
        "state": null,
        "zip_code": null,
        "created_at": "2026-10-16T09:30:00"
    })
}
