//! Registration, login, and password change flows.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{build_app, post_json};

fn register_body(email: &str) -> serde_json::Value {
    json!({
        "name": "Admin",
        "email": email,
        "password": "original-secret"
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_then_login(pool: PgPool) {
    let app = build_app(pool);

    let (status, body) = post_json(&app, "/api/auth/register", register_body("admin@stonegate.test")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered successfully");

    let (status, body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "admin@stonegate.test", "password": "original-secret" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_registration_is_rejected(pool: PgPool) {
    let app = build_app(pool);

    let (status, _) = post_json(&app, "/api/auth/register", register_body("dup@stonegate.test")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(&app, "/api/auth/register", register_body("dup@stonegate.test")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User already exists");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn short_password_is_rejected(pool: PgPool) {
    let app = build_app(pool);

    let (status, body) = post_json(
        &app,
        "/api/auth/register",
        json!({ "name": "Admin", "email": "a@b.test", "password": "short" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_failure_does_not_reveal_which_part_was_wrong(pool: PgPool) {
    let app = build_app(pool);

    let (status, _) = post_json(&app, "/api/auth/register", register_body("known@stonegate.test")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (unknown_status, unknown_body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "nobody@stonegate.test", "password": "original-secret" }),
    )
    .await;
    let (wrong_status, wrong_body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "known@stonegate.test", "password": "not-the-password" }),
    )
    .await;

    assert_eq!(unknown_status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_body, wrong_body);
    assert_eq!(unknown_body["error"], "Invalid email or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn change_password_flow(pool: PgPool) {
    let app = build_app(pool);

    let (status, _) = post_json(&app, "/api/auth/register", register_body("cp@stonegate.test")).await;
    assert_eq!(status, StatusCode::CREATED);

    // Unknown account.
    let (status, _) = post_json(
        &app,
        "/api/change-password",
        json!({
            "email": "ghost@stonegate.test",
            "oldPassword": "original-secret",
            "newPassword": "replacement-secret"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Wrong current password.
    let (status, _) = post_json(
        &app,
        "/api/change-password",
        json!({
            "email": "cp@stonegate.test",
            "oldPassword": "not-the-password",
            "newPassword": "replacement-secret"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // New password below the minimum length.
    let (status, _) = post_json(
        &app,
        "/api/change-password",
        json!({
            "email": "cp@stonegate.test",
            "oldPassword": "original-secret",
            "newPassword": "tiny"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Successful change.
    let (status, body) = post_json(
        &app,
        "/api/change-password",
        json!({
            "email": "cp@stonegate.test",
            "oldPassword": "original-secret",
            "newPassword": "replacement-secret"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    // Old credential is dead, new one works.
    let (status, _) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "cp@stonegate.test", "password": "original-secret" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "cp@stonegate.test", "password": "replacement-secret" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
