use axum::http::{header::AUTHORIZATION, StatusCode};
use rescue_hub::modules::auth::Role;
use serde_json::json;

use crate::common::{bearer, token_for, TestContext};

#[tokio::test]
async fn non_admin_cannot_list_users() {
    let ctx = TestContext::offline();

    for role in [Role::User, Role::Donor] {
        let response = ctx
            .server
            .get("/api/users")
            .add_header(AUTHORIZATION, bearer(&token_for(4, role)))
            .await;

        response.assert_status(StatusCode::FORBIDDEN);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Only admins can list users");
    }
}

#[tokio::test]
async fn user_cannot_read_another_account() {
    let ctx = TestContext::offline();
    let token = token_for(4, Role::User);

    for path in ["/api/users/5", "/api/users/5/donations", "/api/users/5/emergency-reports"] {
        let response = ctx
            .server
            .get(path)
            .add_header(AUTHORIZATION, bearer(&token))
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
    }

    let response = ctx
        .server
        .put("/api/users/info/5")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "name": "Mallory" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_cannot_toggle_two_factor() {
    let ctx = TestContext::offline();

    let response = ctx
        .server
        .put("/api/users/enable-2fa")
        .add_header(AUTHORIZATION, bearer(&token_for(1, Role::Admin)))
        .json(&json!({ "is_2fa": false }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Admins cannot change their two-factor setting");
}

#[tokio::test]
async fn only_admins_grant_admin() {
    let ctx = TestContext::offline();

    let response = ctx
        .server
        .put("/api/users/4/change-role")
        .add_header(AUTHORIZATION, bearer(&token_for(4, Role::User)))
        .json(&json!({ "role": "admin" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Only admins can grant the admin role");
}

#[tokio::test]
async fn plain_user_cannot_record_or_list_donations() {
    let ctx = TestContext::offline();
    let token = token_for(4, Role::User);

    let response = ctx
        .server
        .post("/api/donations")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "amount": 10.0 }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    let response = ctx
        .server
        .get("/api/donations")
        .add_header(AUTHORIZATION, bearer(&token_for(4, Role::Donor)))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}
