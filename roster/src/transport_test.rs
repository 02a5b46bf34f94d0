use super::*;
use crate::test_helpers::MockTransport;

#[test]
fn authorization_formats_bearer_header() {
    let req = ApiRequest::get("/api/family").with_bearer("abc");
    assert_eq!(req.authorization().as_deref(), Some("Bearer abc"));
    assert_eq!(ApiRequest::get("/api/programs").authorization(), None);
}

#[test]
fn response_from_text_tolerates_non_json() {
    let resp = ApiResponse::from_text(502, "<html>Bad Gateway</html>");
    assert_eq!(resp.status, 502);
    assert_eq!(resp.body, Value::Null);
    assert!(!resp.is_success());
    assert!(ApiResponse::from_text(201, "{}").is_success());
}

#[tokio::test]
async fn execute_returns_body_on_success() {
    let transport = MockTransport::new().respond(200, serde_json::json!([1, 2]));
    let body = execute(&transport, ApiRequest::get("/api/programs"), "fallback")
        .await
        .expect("body");
    assert_eq!(body, serde_json::json!([1, 2]));
}

#[tokio::test]
async fn execute_maps_transport_failure_to_network() {
    let transport = MockTransport::new().fail(TransportError::Unreachable("connection refused".to_owned()));
    let err = execute(&transport, ApiRequest::get("/api/programs"), "fallback")
        .await
        .expect_err("should fail");
    assert!(matches!(err, ApiError::Network(TransportError::Unreachable(_))));
}

#[tokio::test]
async fn execute_maps_status_with_fallback() {
    let transport = MockTransport::new().respond(404, Value::Null);
    let err = execute(&transport, ApiRequest::get("/api/programs/9"), "Program not found")
        .await
        .expect_err("should fail");
    assert_eq!(
        err,
        ApiError::Fetch {
            status: 404,
            message: "Program not found".to_owned()
        }
    );
}

#[test]
fn decode_reports_fetch_error_for_wrong_shape() {
    let err = decode::<Vec<String>>(serde_json::json!({ "not": "a list" }), "Failed to load").expect_err("bad shape");
    assert_eq!(
        err,
        ApiError::Fetch {
            status: 200,
            message: "Failed to load".to_owned()
        }
    );
}
