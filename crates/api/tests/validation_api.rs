//! HTTP-level integration tests for request-body validation.
//!
//! Every rejection is a 400 with `code: VALIDATION_ERROR` and a `fields`
//! map keying messages by field name; record-level problems land under
//! `non_field_errors`. Races past the uniqueness pre-check surface as 409.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json_auth, put_json_auth};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_event(pool: &PgPool, token: &str, title: &str) -> i64 {
    let body = serde_json::json!({
        "title": title,
        "start": "2025-01-10T09:00:00Z",
        "end": "2025-01-10T11:00:00Z",
    });
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/events", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Assert a 400 validation response and return the `fields` map.
async fn expect_validation_error(
    response: axum::http::Response<axum::body::Body>,
) -> serde_json::Value {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    json["fields"].clone()
}

// ---------------------------------------------------------------------------
// Name rules
// ---------------------------------------------------------------------------

/// A whitespace-only name is rejected under the "name" key.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_blank_name_rejected(pool: PgPool) {
    let token = common::register_user(&pool, "alice").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "   " });
    let response = post_json_auth(app, "/api/v1/categories", body, &token).await;

    let fields = expect_validation_error(response).await;
    assert!(fields["name"][0]
        .as_str()
        .unwrap()
        .contains("cannot be empty"));
}

/// A name starting with a lowercase letter is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_lowercase_name_rejected(pool: PgPool) {
    let token = common::register_user(&pool, "alice").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "praca" });
    let response = post_json_auth(app, "/api/v1/categories", body, &token).await;

    let fields = expect_validation_error(response).await;
    assert!(fields["name"][0]
        .as_str()
        .unwrap()
        .contains("uppercase letter"));
}

/// Every failing field is reported in one response.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_all_errors_collected(pool: PgPool) {
    let token = common::register_user(&pool, "alice").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "", "color": "red" });
    let response = post_json_auth(app, "/api/v1/categories", body, &token).await;

    let fields = expect_validation_error(response).await;
    assert!(fields["name"].is_array());
    assert!(fields["color"].is_array());
}

// ---------------------------------------------------------------------------
// Uniqueness
// ---------------------------------------------------------------------------

/// A duplicate name for the same owner fails under non_field_errors.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_name_same_owner(pool: PgPool) {
    let token = common::register_user(&pool, "alice").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": "Praca" });
    let response = post_json_auth(app, "/api/v1/categories", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "Praca" });
    let response = post_json_auth(app, "/api/v1/categories", body, &token).await;

    let fields = expect_validation_error(response).await;
    assert!(fields["non_field_errors"][0]
        .as_str()
        .unwrap()
        .contains("unique"));
}

/// The same name under different owners is fine.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_same_name_different_owners(pool: PgPool) {
    let alice = common::register_user(&pool, "alice").await;
    let bob = common::register_user(&pool, "bob").await;

    for token in [&alice, &bob] {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({ "name": "Praca" });
        let response = post_json_auth(app, "/api/v1/categories", body, token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

/// Renaming a row to its own current name is not a duplicate.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_to_own_name_allowed(pool: PgPool) {
    let token = common::register_user(&pool, "alice").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": "Praca" });
    let response = post_json_auth(app, "/api/v1/categories", body, &token).await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "Praca", "color": "#112233" });
    let response = put_json_auth(app, &format!("/api/v1/categories/{id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Event time ordering
// ---------------------------------------------------------------------------

/// An event ending before it starts fails under the "end" key.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_end_before_start_rejected(pool: PgPool) {
    let token = common::register_user(&pool, "alice").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "title": "Kolokwium",
        "start": "2025-01-10T11:00:00Z",
        "end": "2025-01-10T09:00:00Z",
    });
    let response = post_json_auth(app, "/api/v1/events", body, &token).await;

    let fields = expect_validation_error(response).await;
    assert!(fields["end"][0]
        .as_str()
        .unwrap()
        .contains("earlier than start"));
}

/// A zero-duration event is accepted.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_zero_duration_event_accepted(pool: PgPool) {
    let token = common::register_user(&pool, "alice").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "title": "Kolokwium",
        "start": "2025-01-10T10:00:00Z",
        "end": "2025-01-10T10:00:00Z",
    });
    let response = post_json_auth(app, "/api/v1/events", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// On update, the ordering rule reads the stored value for the side the
/// payload omits: moving the start past the stored end fails.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_start_past_stored_end_rejected(pool: PgPool) {
    let token = common::register_user(&pool, "alice").await;
    let id = create_event(&pool, &token, "Kolokwium").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "start": "2025-01-10T12:00:00Z" });
    let response = put_json_auth(app, &format!("/api/v1/events/{id}"), body, &token).await;

    let fields = expect_validation_error(response).await;
    assert!(fields["end"].is_array());
}

/// Unknown status and priority values are rejected together.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_status_and_priority_rejected(pool: PgPool) {
    let token = common::register_user(&pool, "alice").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "title": "Kolokwium",
        "start": "2025-01-10T09:00:00Z",
        "end": "2025-01-10T11:00:00Z",
        "status": "archived",
        "priority": "urgent",
    });
    let response = post_json_auth(app, "/api/v1/events", body, &token).await;

    let fields = expect_validation_error(response).await;
    assert!(fields["status"].is_array());
    assert!(fields["priority"].is_array());
}

/// Referencing another user's category is reported as unknown.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_foreign_category_reference_rejected(pool: PgPool) {
    let alice = common::register_user(&pool, "alice").await;
    let bob = common::register_user(&pool, "bob").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": "Praca" });
    let response = post_json_auth(app, "/api/v1/categories", body, &alice).await;
    let category_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "title": "Kolokwium",
        "start": "2025-01-10T09:00:00Z",
        "end": "2025-01-10T11:00:00Z",
        "category": category_id,
    });
    let response = post_json_auth(app, "/api/v1/events", body, &bob).await;

    let fields = expect_validation_error(response).await;
    assert!(fields["category"].is_array());
}

// ---------------------------------------------------------------------------
// Reminder timing
// ---------------------------------------------------------------------------

/// A reminder after the event's end fails under the "when" key.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reminder_after_event_end_rejected(pool: PgPool) {
    let token = common::register_user(&pool, "alice").await;
    let event_id = create_event(&pool, &token, "Kolokwium").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "when": "2025-01-10T12:00:00Z" });
    let response =
        post_json_auth(app, &format!("/api/v1/events/{event_id}/reminders"), body, &token).await;

    let fields = expect_validation_error(response).await;
    assert!(fields["when"][0]
        .as_str()
        .unwrap()
        .contains("after the event ends"));
}

/// A reminder exactly at the event's end is accepted.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reminder_at_event_end_accepted(pool: PgPool) {
    let token = common::register_user(&pool, "alice").await;
    let event_id = create_event(&pool, &token, "Kolokwium").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "when": "2025-01-10T11:00:00Z" });
    let response =
        post_json_auth(app, &format!("/api/v1/events/{event_id}/reminders"), body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Re-pointing a reminder at an event whose end precedes the stored
/// reminder time fails against the new target.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reminder_repoint_checks_new_event_end(pool: PgPool) {
    let token = common::register_user(&pool, "alice").await;
    let late_event = create_event(&pool, &token, "Kolokwium").await;

    // An earlier event that ends at 08:00.
    let body = serde_json::json!({
        "title": "Poranne spotkanie",
        "start": "2025-01-10T07:00:00Z",
        "end": "2025-01-10T08:00:00Z",
    });
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/events", body, &token).await;
    let early_event = body_json(response).await["data"]["id"].as_i64().unwrap();

    // Reminder at 10:00 under the late event (ends 11:00) is fine.
    let body = serde_json::json!({ "when": "2025-01-10T10:00:00Z" });
    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, &format!("/api/v1/events/{late_event}/reminders"), body, &token).await;
    let reminder_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    // Moving it to the early event leaves it past that event's end.
    let body = serde_json::json!({ "event": early_event });
    let app = common::build_test_app(pool);
    let response =
        put_json_auth(app, &format!("/api/v1/reminders/{reminder_id}"), body, &token).await;

    let fields = expect_validation_error(response).await;
    assert!(fields["when"].is_array());
}

/// An overlong reminder message is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_overlong_reminder_message_rejected(pool: PgPool) {
    let token = common::register_user(&pool, "alice").await;
    let event_id = create_event(&pool, &token, "Kolokwium").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "when": "2025-01-10T08:00:00Z",
        "message": "x".repeat(201),
    });
    let response =
        post_json_auth(app, &format!("/api/v1/events/{event_id}/reminders"), body, &token).await;

    let fields = expect_validation_error(response).await;
    assert!(fields["message"].is_array());
}
