use axum::http::StatusCode;

use crate::common::TestContext;

#[tokio::test]
async fn health_reports_version() {
    let ctx = TestContext::offline();

    let response = ctx.server.get("/health").await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let ctx = TestContext::offline();

    let response = ctx.server.get("/health").await;

    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
    assert_eq!(response.header("cache-control"), "no-store");
}

#[tokio::test]
async fn metrics_count_requests_by_normalized_path() {
    let ctx = TestContext::offline();

    ctx.server.get("/api/shelters/17/refugees").await;
    ctx.server.get("/health").await;

    let response = ctx.server.get("/metrics").await;
    response.assert_status(StatusCode::OK);

    let text = response.text();
    assert!(text.contains("rescue_hub_http_requests_total"));
    assert!(text.contains("/api/shelters/:id/refugees"));
    assert!(!text.contains("/api/shelters/17/refugees"));
}

#[tokio::test]
async fn unknown_route_uses_error_envelope() {
    let ctx = TestContext::offline();

    let response = ctx.server.get("/api/nowhere").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Route not found");
}

#[tokio::test]
async fn exhausted_rate_limit_returns_too_many_requests() {
    let ctx = TestContext::offline_with(&[("RATE_LIMIT_PER_SECOND", "1"), ("RATE_LIMIT_BURST", "1")]);

    ctx.server.get("/health").await.assert_status(StatusCode::OK);

    let response = ctx.server.get("/health").await;
    response.assert_status(StatusCode::TOO_MANY_REQUESTS);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Too many requests");
}
