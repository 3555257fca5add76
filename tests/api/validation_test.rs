use axum::http::{header::AUTHORIZATION, StatusCode};
use rescue_hub::modules::auth::Role;
use serde_json::json;

use crate::common::{bearer, token_for, TestContext};

#[tokio::test]
async fn disaster_with_unknown_status_is_rejected() {
    let ctx = TestContext::offline();

    let response = ctx
        .server
        .post("/api/disasters")
        .add_header(AUTHORIZATION, bearer(&token_for(3, Role::User)))
        .json(&json!({
            "type": "earthquake",
            "location": "Cianjur",
            "status": "ongoing"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(
        body["error"],
        "Invalid disaster status, must be one of 'active', 'resolved' or 'archived'"
    );
}

#[tokio::test]
async fn donation_with_unknown_status_is_rejected() {
    let ctx = TestContext::offline();

    let response = ctx
        .server
        .post("/api/donations")
        .add_header(AUTHORIZATION, bearer(&token_for(3, Role::Donor)))
        .json(&json!({ "amount": 50000.0, "status": "refunded" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(
        body["error"],
        "Invalid donation status, must be one of 'pending', 'confirmed' or 'rejected'"
    );
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let ctx = TestContext::offline();

    let response = ctx
        .server
        .post("/api/disasters")
        .add_header(AUTHORIZATION, bearer(&token_for(3, Role::User)))
        .text("{not json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid input");
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let ctx = TestContext::offline();

    let response = ctx
        .server
        .get("/api/users/abc")
        .add_header(AUTHORIZATION, bearer(&token_for(1, Role::Admin)))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid ID");
}

#[tokio::test]
async fn empty_update_is_bad_request() {
    let ctx = TestContext::offline();

    let response = ctx
        .server
        .put("/api/disasters/1")
        .add_header(AUTHORIZATION, bearer(&token_for(1, Role::Admin)))
        .json(&json!({ "location": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No updatable fields were supplied");
}

#[tokio::test]
async fn evacuation_route_requires_status() {
    let ctx = TestContext::offline();

    let response = ctx
        .server
        .post("/api/evacuation_routes")
        .add_header(AUTHORIZATION, bearer(&token_for(1, Role::Admin)))
        .json(&json!({
            "origin": "Village A",
            "destination": "Stadium",
            "distance": 3.5,
            "status": ""
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn distribution_log_needs_day_first_timestamp() {
    let ctx = TestContext::offline();

    let response = ctx
        .server
        .post("/api/distribution_logs")
        .add_header(AUTHORIZATION, bearer(&token_for(1, Role::Admin)))
        .json(&json!({
            "origin": "Warehouse",
            "destination": "Shelter 2",
            "sender_name": "Budi",
            "recipient_name": "Sari",
            "quantity_sent": 5,
            "sent_at": "2024-08-17 14:30"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_role_is_rejected_on_register_and_change() {
    let ctx = TestContext::offline();

    let response = ctx
        .server
        .post("/api/users")
        .json(&json!({
            "name": "Rina",
            "email": "rina@example.com",
            "password": "TestPassword123!",
            "role": "volunteer"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid user role, must be one of 'admin', 'donor' or 'user'");

    let response = ctx
        .server
        .put("/api/users/4/change-role")
        .add_header(AUTHORIZATION, bearer(&token_for(4, Role::User)))
        .json(&json!({ "role": "superuser" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
