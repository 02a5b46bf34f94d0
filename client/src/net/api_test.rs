use super::*;

#[test]
fn send_failed_message_includes_detail() {
    assert_eq!(send_failed_message("TypeError: Failed to fetch"), "request failed: TypeError: Failed to fetch");
}

#[test]
fn transport_carries_compiled_config() {
    let transport = transport();
    assert_eq!(transport.config(), &api_config());
    assert!(!transport.config().base_url.ends_with('/'));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_transport_reports_unreachable() {
    let transport = BrowserTransport::new(ApiConfig::default());
    let result = block_on_ready(transport.send(ApiRequest::get("/api/programs")));
    assert!(matches!(result, Err(TransportError::Unreachable(_))));
}

/// Minimal executor for a future that completes on first poll.
#[cfg(not(feature = "csr"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future did not complete immediately"),
    }
}
