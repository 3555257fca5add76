use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use rescue_hub::modules::auth::Role;
use serde_json::json;

use crate::common::{bearer, expired_token_for, just_expired_token_for, TestContext};

#[tokio::test]
async fn protected_route_without_token_returns_unauthorized() {
    let ctx = TestContext::offline();

    let response = ctx
        .server
        .post("/api/disasters")
        .json(&json!({ "type": "flood", "location": "Palu" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Authorization token is missing");
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let ctx = TestContext::offline();

    for path in ["/api/users", "/api/volunteers", "/api/distribution_logs"] {
        let response = ctx
            .server
            .get(path)
            .add_header(AUTHORIZATION, bearer(&expired_token_for(1, Role::Admin)))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Invalid or expired token");
    }
}

#[tokio::test]
async fn token_expired_seconds_ago_is_rejected() {
    let ctx = TestContext::offline();

    // A donor passing authentication would get 403 here, not 401.
    let response = ctx
        .server
        .get("/api/donations")
        .add_header(AUTHORIZATION, bearer(&just_expired_token_for(3, Role::Donor)))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn garbage_and_foreign_tokens_are_rejected() {
    let ctx = TestContext::offline();

    let foreign = rescue_hub::services::jwt::JwtService::new("some-other-secret".to_string(), 1)
        .create_token(1, "admin@example.com", Role::Admin)
        .unwrap();

    for value in [
        bearer("not.a.jwt"),
        bearer(&foreign),
        HeaderValue::from_static("Token abc"),
    ] {
        let response = ctx
            .server
            .get("/api/users")
            .add_header(AUTHORIZATION, value)
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn public_route_hides_database_failure() {
    let ctx = TestContext::offline();

    // Reaches the handler, which then fails on the unreachable database.
    let response = ctx.server.get("/api/disasters").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Internal server error");
}
