//! End-to-end flows against a real MySQL database.
//!
//! Run with `TEST_DATABASE_URL=mysql://... cargo test -- --ignored`.

use axum::http::{header::AUTHORIZATION, StatusCode};
use serde_json::{json, Value};
use serial_test::serial;

use crate::common::{bearer, test_email, test_password, TestContext};

async fn register(ctx: &TestContext, role: &str) -> (i64, String) {
    let email = test_email();

    let response = ctx
        .server
        .post("/api/users")
        .json(&json!({
            "name": "Test User",
            "email": &email,
            "password": test_password(),
            "role": role,
            "contact": "0812000000"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    (body["result"]["id"].as_i64().unwrap(), email)
}

async fn login(ctx: &TestContext, email: &str) -> Value {
    let response = ctx
        .server
        .post("/api/users/login")
        .json(&json!({ "email": email, "password": test_password() }))
        .await;

    response.assert_status(StatusCode::OK);
    response.json()
}

async fn token(ctx: &TestContext, email: &str) -> String {
    login(ctx, email).await["token"].as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
#[serial]
async fn missing_shelter_returns_not_found() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/api/shelters/999999").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "Shelter not found");

    ctx.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
#[serial]
async fn donor_cannot_update_another_donors_donation() {
    let ctx = TestContext::new().await;
    let (owner_id, owner_email) = register(&ctx, "donor").await;
    let (_, other_email) = register(&ctx, "donor").await;
    let owner = token(&ctx, &owner_email).await;
    let other = token(&ctx, &other_email).await;

    let response = ctx
        .server
        .post("/api/donations")
        .add_header(AUTHORIZATION, bearer(&owner))
        .json(&json!({ "amount": 150000.0, "item_name": "Blankets" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    let donation_id = body["result"]["id"].as_i64().unwrap();
    assert_eq!(body["result"]["donor_id"], owner_id);
    assert_eq!(body["result"]["status"], "pending");

    let response = ctx
        .server
        .put(&format!("/api/donations/{}", donation_id))
        .add_header(AUTHORIZATION, bearer(&other))
        .json(&json!({ "status": "confirmed" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    let body: Value = response.json();
    assert_eq!(body["error"], "You can only access your own donations");

    let response = ctx
        .server
        .put(&format!("/api/donations/{}", donation_id))
        .add_header(AUTHORIZATION, bearer(&owner))
        .json(&json!({ "amount": 0.0 }))
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["result"]["amount"], 0.0);

    ctx.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
#[serial]
async fn admin_login_requires_one_time_code() {
    let ctx = TestContext::new().await;
    let (_, email) = register(&ctx, "admin").await;

    let body = login(&ctx, &email).await;
    assert!(body.get("token").is_none());
    assert!(body.get("message").is_some());

    let code = ctx.mailer.last_code_for(&email).expect("no code was mailed");
    let wrong = if code == "000000" { "111111" } else { "000000" };

    let response = ctx
        .server
        .post("/api/users/verify-otp")
        .json(&json!({ "email": &email, "otp": wrong }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = ctx
        .server
        .post("/api/users/verify-otp")
        .json(&json!({ "email": &email, "otp": &code }))
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["token_type"], "Bearer");
    let admin = body["token"].as_str().unwrap().to_string();

    // Codes are single use.
    let response = ctx
        .server
        .post("/api/users/verify-otp")
        .json(&json!({ "email": &email, "otp": &code }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = ctx
        .server
        .get("/api/users")
        .add_header(AUTHORIZATION, bearer(&admin))
        .await;
    response.assert_status(StatusCode::OK);

    ctx.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
#[serial]
async fn only_the_first_admin_may_self_register() {
    let ctx = TestContext::new().await;
    register(&ctx, "admin").await;

    let response = ctx
        .server
        .post("/api/users")
        .json(&json!({
            "name": "Second Admin",
            "email": test_email(),
            "password": test_password(),
            "role": "admin"
        }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    ctx.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
#[serial]
async fn duplicate_email_is_rejected() {
    let ctx = TestContext::new().await;
    let (_, email) = register(&ctx, "user").await;

    let response = ctx
        .server
        .post("/api/users")
        .json(&json!({ "name": "Again", "email": &email, "password": test_password() }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Email is already registered");

    ctx.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
#[serial]
async fn created_disaster_round_trips() {
    let ctx = TestContext::new().await;
    let (user_id, email) = register(&ctx, "user").await;
    let user = token(&ctx, &email).await;

    let input = json!({
        "type": "flood",
        "location": "Kampung Melayu",
        "description": "River overflowed after two days of rain",
        "status": "resolved"
    });

    let response = ctx
        .server
        .post("/api/disasters")
        .add_header(AUTHORIZATION, bearer(&user))
        .json(&input)
        .await;
    response.assert_status(StatusCode::CREATED);

    let id = response.json::<Value>()["result"]["id"].as_i64().unwrap();

    let response = ctx.server.get(&format!("/api/disasters/{}", id)).await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    let fetched = &body["result"];
    for field in ["type", "location", "description", "status"] {
        assert_eq!(fetched[field], input[field], "field {} differs", field);
    }
    assert_eq!(fetched["reported_by"], user_id);

    let response = ctx.server.get(&format!("/api/disasters/{}/shelters", id)).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["result"], json!([]));

    ctx.server
        .get("/api/disasters/999999/shelters")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    ctx.cleanup().await;
}

async fn admin_token(ctx: &TestContext) -> String {
    let (_, email) = register(ctx, "admin").await;
    login(ctx, &email).await;

    let code = ctx.mailer.last_code_for(&email).expect("no code was mailed");
    let response = ctx
        .server
        .post("/api/users/verify-otp")
        .json(&json!({ "email": &email, "otp": code }))
        .await;
    response.assert_status(StatusCode::OK);

    response.json::<Value>()["token"].as_str().unwrap().to_string()
}

// Signs up as a volunteer so volunteer-or-admin routes open up.
async fn volunteer_token(ctx: &TestContext) -> String {
    let (_, email) = register(ctx, "user").await;
    let user = token(ctx, &email).await;

    ctx.server
        .post("/api/volunteers")
        .add_header(AUTHORIZATION, bearer(&user))
        .json(&json!({ "skill": "first aid", "location": "Palu" }))
        .await
        .assert_status(StatusCode::CREATED);

    user
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
#[serial]
async fn created_distribution_log_keeps_sent_at_text() {
    let ctx = TestContext::new().await;
    let volunteer = volunteer_token(&ctx).await;

    let input = json!({
        "origin": "Warehouse A",
        "destination": "Shelter 3",
        "distance": 4.5,
        "sender_name": "Budi",
        "recipient_name": "Sari",
        "quantity_sent": 12,
        "sent_at": "07/08/2024 09:05"
    });

    let response = ctx
        .server
        .post("/api/distribution_logs")
        .add_header(AUTHORIZATION, bearer(&volunteer))
        .json(&input)
        .await;
    response.assert_status(StatusCode::CREATED);

    let id = response.json::<Value>()["result"]["id"].as_i64().unwrap();

    let response = ctx
        .server
        .get(&format!("/api/distribution_logs/{}", id))
        .add_header(AUTHORIZATION, bearer(&volunteer))
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    let fetched = &body["result"];
    for field in [
        "origin",
        "destination",
        "distance",
        "sender_name",
        "recipient_name",
        "quantity_sent",
        "sent_at",
    ] {
        assert_eq!(fetched[field], input[field], "field {} differs", field);
    }

    ctx.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
#[serial]
async fn created_shelter_defaults_remaining_capacity() {
    let ctx = TestContext::new().await;
    let volunteer = volunteer_token(&ctx).await;

    let input = json!({
        "name": "Sports Hall",
        "location": "Palu Barat",
        "capacity_total": 120,
        "emergency_needs": "water, blankets"
    });

    let response = ctx
        .server
        .post("/api/shelters")
        .add_header(AUTHORIZATION, bearer(&volunteer))
        .json(&input)
        .await;
    response.assert_status(StatusCode::CREATED);

    let id = response.json::<Value>()["result"]["id"].as_i64().unwrap();

    let response = ctx.server.get(&format!("/api/shelters/{}", id)).await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    let fetched = &body["result"];
    for field in ["name", "location", "capacity_total", "emergency_needs"] {
        assert_eq!(fetched[field], input[field], "field {} differs", field);
    }
    assert_eq!(fetched["capacity_remaining"], 120);

    ctx.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
#[serial]
async fn admin_records_donation_for_donor_by_user_id() {
    let ctx = TestContext::new().await;
    let admin = admin_token(&ctx).await;
    let (donor_id, donor_email) = register(&ctx, "donor").await;
    let donor = token(&ctx, &donor_email).await;

    let response = ctx
        .server
        .post("/api/donations")
        .add_header(AUTHORIZATION, bearer(&admin))
        .json(&json!({
            "user_id": donor_id,
            "amount": 500000.0,
            "item_name": "Rice",
            "status": "confirmed"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let id = response.json::<Value>()["result"]["id"].as_i64().unwrap();

    // The donor owns it, so the owner guard lets them read it.
    let response = ctx
        .server
        .get(&format!("/api/donations/{}", id))
        .add_header(AUTHORIZATION, bearer(&donor))
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    let fetched = &body["result"];
    assert_eq!(fetched["donor_id"], donor_id);
    assert_eq!(fetched["amount"], 500000.0);
    assert_eq!(fetched["item_name"], "Rice");
    assert_eq!(fetched["status"], "confirmed");

    ctx.cleanup().await;
}
