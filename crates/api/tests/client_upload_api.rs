//! The multipart client-creation workflow and its interaction with the
//! image host.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{
    build_app, build_app_with_store, delete, get, multipart_client_body, post_multipart,
    put_json, RecordingImageStore,
};

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];

#[sqlx::test(migrations = "../db/migrations")]
async fn multipart_create_uploads_then_persists(pool: PgPool) {
    let store = Arc::new(RecordingImageStore::default());
    let app = build_app_with_store(pool, store.clone());

    let body = multipart_client_body(Some("Acme Holdings"), Some(("logo.png", PNG_BYTES)));
    let (status, created) = post_multipart(&app, "/api/clients", body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Acme Holdings");
    assert_eq!(created["image"], "https://img.test/clients/logo.png");

    let uploads = store.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0, "clients");
    assert_eq!(uploads[0].1, "logo.png");
    assert_eq!(uploads[0].2, PNG_BYTES.len());
    drop(uploads);
    assert!(store.deletes.lock().unwrap().is_empty());

    let (status, listed) = get(&app, "/api/clients").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["total"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_parts_are_rejected_before_any_upload(pool: PgPool) {
    let store = Arc::new(RecordingImageStore::default());
    let app = build_app_with_store(pool, store.clone());

    let (status, body) = post_multipart(
        &app,
        "/api/clients",
        multipart_client_body(Some("No Logo Ltd"), None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) = post_multipart(
        &app,
        "/api/clients",
        multipart_client_body(None, Some(("logo.png", PNG_BYTES))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(store.uploads.lock().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn host_outage_surfaces_as_upload_failure(pool: PgPool) {
    let store = Arc::new(RecordingImageStore {
        fail_uploads: true,
        ..Default::default()
    });
    let app = build_app_with_store(pool, store.clone());

    let body = multipart_client_body(Some("Acme Holdings"), Some(("logo.png", PNG_BYTES)));
    let (status, body) = post_multipart(&app, "/api/clients", body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "UPLOAD_FAILED");

    // Nothing was persisted.
    let (_, listed) = get(&app, "/api/clients").await;
    assert_eq!(listed["total"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_and_delete_use_plain_json(pool: PgPool) {
    let app = build_app(pool.clone());

    let body = multipart_client_body(Some("Acme Holdings"), Some(("logo.png", PNG_BYTES)));
    let (_, created) = post_multipart(&app, "/api/clients", body).await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = put_json(
        &app,
        &format!("/api/clients/{id}"),
        json!({ "name": "Acme Group" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Acme Group");
    assert_eq!(updated["image"], created["image"]);

    let (status, body) = delete(&app, &format!("/api/clients/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Client deleted successfully");

    let (status, _) = get(&app, &format!("/api/clients/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
