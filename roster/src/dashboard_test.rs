use super::*;
use crate::error::TransportError;
use crate::family::FamilyClient;
use crate::form::{self, FamilyField, FamilyForm, SubmitOutcome};
use crate::gate::{self, GateDecision};
use crate::session::Session;
use crate::test_helpers::{MockTransport, auth_json, family_json};
use crate::types::Credentials;

fn family(id: i64, name: &str) -> Family {
    serde_json::from_value(family_json(id, name, None)).expect("family")
}

fn creds() -> Credentials {
    Credentials { email: "jane@example.com".to_owned(), password: "secret".to_owned() }
}

/// Sign in, then run the dashboard's mount-time read.
async fn signed_in(transport: &MockTransport) -> (Session, DashboardState) {
    let mut session = Session::anonymous();
    session.establish(crate::auth::login(transport, &creds()).await.expect("login"));
    let mut state = DashboardState::default();
    load(transport, &mut session, &mut state).await;
    (session, state)
}

/// One read as the dashboard page performs it: ticket, list, apply, and a
/// sign-out on auth failure.
async fn load(transport: &MockTransport, session: &mut Session, state: &mut DashboardState) {
    let Some(token) = session.token().map(str::to_owned) else {
        return;
    };
    let ticket = state.begin_load();
    let result = FamilyClient::new(transport).list(Some(&token)).await;
    if state.apply(ticket, result).is_some() {
        session.clear();
    }
}

// =============================================================
// DashboardState
// =============================================================

#[test]
fn view_shows_loading_before_first_result() {
    let mut state = DashboardState::default();
    state.begin_load();
    assert_eq!(state.view(), ListView::Loading);
}

#[test]
fn view_shows_error_when_nothing_loaded() {
    let mut state = DashboardState::default();
    let ticket = state.begin_load();
    state.apply(ticket, Err(ApiError::Network(TransportError::Unreachable("refused".to_owned()))));
    assert_eq!(state.view(), ListView::Error("network error: refused"));
}

#[test]
fn failed_refresh_shows_error_beside_prior_families() {
    let smith = family(1, "Smith Family");
    let mut state = DashboardState::default();
    let first = state.begin_load();
    state.apply(first, Ok(vec![smith.clone()]));
    let second = state.begin_load();
    state.apply(second, Err(ApiError::Fetch { status: 500, message: "database unavailable".to_owned() }));

    assert_eq!(state.families(), std::slice::from_ref(&smith));
    assert_eq!(
        state.view(),
        ListView::Stale { families: std::slice::from_ref(&smith), error: "database unavailable" }
    );
}

#[test]
fn successful_refresh_clears_a_previous_error() {
    let mut state = DashboardState::default();
    let first = state.begin_load();
    state.apply(first, Err(ApiError::Fetch { status: 500, message: "boom".to_owned() }));
    let second = state.begin_load();
    state.apply(second, Ok(Vec::new()));
    assert_eq!(state.view(), ListView::Empty);
}

#[test]
fn auth_failure_clears_families_and_is_returned() {
    let mut state = DashboardState::default();
    let first = state.begin_load();
    state.apply(first, Ok(vec![family(1, "Smith Family")]));
    let second = state.begin_load();
    let returned = state.apply(second, Err(ApiError::Auth("expired".to_owned())));
    assert!(returned.is_some_and(|e| e.is_auth()));
    assert!(state.families().is_empty());
}

#[test]
fn superseded_read_is_ignored_when_it_lands_last() {
    let mut state = DashboardState::default();
    let mount = state.begin_load();
    let refresh = state.begin_load();

    state.apply(refresh, Ok(vec![family(1, "Smith Family"), family(42, "Lopez Family")]));
    let dropped = state.apply(mount, Ok(vec![family(1, "Smith Family")]));

    assert_eq!(dropped, None);
    assert_eq!(state.families().len(), 2);
    assert!(!state.is_loading());
}

#[test]
fn superseded_read_does_not_end_loading() {
    let mut state = DashboardState::default();
    let mount = state.begin_load();
    let _refresh = state.begin_load();
    state.apply(mount, Ok(Vec::new()));
    assert!(state.is_loading());
    assert_eq!(state.view(), ListView::Loading);
}

#[test]
fn tickets_from_before_a_reset_stay_superseded() {
    let mut state = DashboardState::default();
    let stale = state.begin_load();
    state.reset();
    let _fresh = state.begin_load();
    assert_eq!(state.apply(stale, Err(ApiError::Auth("expired".to_owned()))), None);
    assert!(state.is_loading());
}

// =============================================================
// Scenarios
// =============================================================

#[tokio::test]
async fn login_with_no_families_shows_empty_message() {
    let transport = MockTransport::new()
        .respond(200, auth_json("tok-1"))
        .respond(200, serde_json::json!([]));

    let (session, state) = signed_in(&transport).await;

    assert_eq!(session.user().map(|u| u.first_name.as_str()), Some("Jane"));
    assert_eq!(gate::decide(&session), GateDecision::Render);
    assert_eq!(state.view(), ListView::Empty);
    assert_eq!(EMPTY_MESSAGE, "No family registrations yet.");
    assert_eq!(transport.paths(), vec!["POST /api/auth/login", "GET /api/family"]);
}

#[tokio::test]
async fn registration_refreshes_once_after_create() {
    let transport = MockTransport::new()
        .respond(200, auth_json("tok-1"))
        .respond(200, serde_json::json!([]));
    let (mut session, mut state) = signed_in(&transport).await;
    transport.push(
        201,
        serde_json::json!({ "message": "Family registered successfully", "family": family_json(42, "Smith Family", Some("Austin")) }),
    );
    transport.push(200, serde_json::json!([family_json(42, "Smith Family", Some("Austin"))]));

    let mut form = FamilyForm::default();
    form.set(FamilyField::FamilyName, "Smith Family".to_owned());
    form.set(FamilyField::City, "Austin".to_owned());
    let payload = form.begin_submit().expect("submit");
    let outcome = form::send(&transport, session.token(), &payload).await;
    assert_eq!(outcome, SubmitOutcome::Registered);
    load(&transport, &mut session, &mut state).await;

    assert_eq!(
        transport.paths(),
        vec!["POST /api/auth/login", "GET /api/family", "POST /api/family", "GET /api/family"]
    );
    let families = state.families();
    assert_eq!(families.len(), 1);
    assert_eq!(families[0].id, "42");
    assert_eq!(families[0].city.as_deref(), Some("Austin"));
    assert!(families[0].created_at.is_some());
}

#[tokio::test]
async fn list_401_signs_out_and_hides_stale_families() {
    let transport = MockTransport::new()
        .respond(200, auth_json("tok-1"))
        .respond(200, serde_json::json!([family_json(1, "Smith Family", None)]))
        .respond(401, serde_json::json!({ "msg": "Token has expired" }));
    let (mut session, mut state) = signed_in(&transport).await;
    assert_eq!(state.families().len(), 1);

    load(&transport, &mut session, &mut state).await;

    assert!(!session.is_authenticated());
    assert_eq!(gate::decide(&session), GateDecision::Redirect("/login"));
    assert!(state.families().is_empty());
}

#[tokio::test]
async fn signed_out_session_skips_the_read() {
    let transport = MockTransport::new();
    let mut session = Session::anonymous();
    let mut state = DashboardState::default();

    load(&transport, &mut session, &mut state).await;

    assert!(transport.requests().is_empty());
    assert!(!state.is_loading());
}

#[tokio::test]
async fn logout_then_family_calls_fail_without_network() {
    let transport = MockTransport::new()
        .respond(200, auth_json("tok-1"))
        .respond(200, serde_json::json!([]));
    let (mut session, _) = signed_in(&transport).await;
    session.clear();
    let sent_before = transport.requests().len();

    let client = FamilyClient::new(&transport);
    assert!(client.list(session.token()).await.expect_err("list").is_auth());
    let fields = crate::types::NewFamily { family_name: "Smith Family".to_owned(), ..Default::default() };
    assert!(client.create(session.token(), &fields).await.expect_err("create").is_auth());

    assert_eq!(transport.requests().len(), sent_before);
}
