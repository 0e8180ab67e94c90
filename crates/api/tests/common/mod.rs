//! Shared helpers for the HTTP integration tests.
//!
//! Tests build the real router (same assembly as the binary) on top of the
//! per-test database that `#[sqlx::test]` provides, and swap the image
//! store for an in-memory recording stub.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use stonegate_api::config::{ImageHostConfig, ServerConfig};
use stonegate_api::routes;
use stonegate_api::state::AppState;
use stonegate_api::uploads::{ImageStore, StoredImage, UploadError};

/// In-memory stand-in for the image host. Records every call so tests can
/// assert on the upload workflow without a network.
#[derive(Default)]
pub struct RecordingImageStore {
    /// `(folder, filename, byte_count)` per upload.
    pub uploads: Mutex<Vec<(String, String, usize)>>,
    /// Public ids passed to `delete`.
    pub deletes: Mutex<Vec<String>>,
    /// When set, every upload fails as if the host were down.
    pub fail_uploads: bool,
}

#[async_trait]
impl ImageStore for RecordingImageStore {
    async fn upload(
        &self,
        folder: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredImage, UploadError> {
        if self.fail_uploads {
            return Err(UploadError::Rejected("simulated host outage".into()));
        }
        self.uploads
            .lock()
            .unwrap()
            .push((folder.to_owned(), filename.to_owned(), bytes.len()));
        Ok(StoredImage {
            url: format!("https://img.test/{folder}/{filename}"),
            public_id: format!("{folder}/{filename}"),
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), UploadError> {
        self.deletes.lock().unwrap().push(public_id.to_owned());
        Ok(())
    }
}

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".into()],
        request_timeout_secs: 5,
        image_host: ImageHostConfig {
            base_url: "http://localhost:9000".into(),
            upload_preset: "test".into(),
        },
    }
}

pub fn build_app_with_store(pool: PgPool, store: Arc<RecordingImageStore>) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        image_store: store,
    };
    routes::app(state)
}

pub fn build_app(pool: PgPool) -> Router {
    build_app_with_store(pool, Arc::new(RecordingImageStore::default()))
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "GET", uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "POST", uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "PUT", uri, Some(body)).await
}

pub async fn patch_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "PATCH", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "DELETE", uri, None).await
}

const BOUNDARY: &str = "test-boundary-5fT9xA2kQ";

/// Hand-rolled multipart body with a `name` text field and an `image` file
/// field.
pub fn multipart_client_body(name: Option<&str>, file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    if let Some(name) = name {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\n{name}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; \
                 filename=\"{filename}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: &Router, uri: &str, body: Vec<u8>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
