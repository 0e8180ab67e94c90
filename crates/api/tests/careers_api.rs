//! Open positions and candidate applications.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{build_app, delete, get, post_json, put_json};

fn position_body(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "location": "Head office, Dhaka",
        "description": "Full time role"
    })
}

fn application_body(job_id: i64) -> serde_json::Value {
    json!({
        "name": "Candidate",
        "email": "candidate@mail.test",
        "jobId": job_id,
        "cvUrl": "https://files.test/cv.pdf"
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn position_crud_lifecycle(pool: PgPool) {
    let app = build_app(pool);

    let (status, created) = post_json(&app, "/api/job-positions", position_body("Site Engineer")).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = get(&app, &format!("/api/job-positions/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Site Engineer");

    let (status, updated) = put_json(
        &app,
        &format!("/api/job-positions/{id}"),
        json!({ "title": "Senior Site Engineer" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Senior Site Engineer");
    assert_eq!(updated["location"], "Head office, Dhaka");

    let (_, body) = get(&app, "/api/job-positions/total").await;
    assert_eq!(body["total"], 1);

    let (status, _) = delete(&app, &format!("/api/job-positions/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&app, &format!("/api/job-positions/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn apply_creates_an_application(pool: PgPool) {
    let app = build_app(pool);

    let (_, position) = post_json(&app, "/api/job-positions", position_body("Architect")).await;
    let job_id = position["id"].as_i64().unwrap();

    let (status, created) = post_json(&app, "/api/apply", application_body(job_id)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["jobId"], job_id);
    assert_eq!(created["cvUrl"], "https://files.test/cv.pdf");

    // Repeat applications are allowed.
    let (status, _) = post_json(&app, "/api/apply", application_body(job_id)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "/api/applications").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn apply_validates_required_fields(pool: PgPool) {
    let app = build_app(pool);

    let mut missing_cv = application_body(1);
    missing_cv["cvUrl"] = json!("  ");
    let (status, body) = post_json(&app, "/api/apply", missing_cv).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) = post_json(&app, "/api/apply", application_body(0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn applications_survive_position_deletion(pool: PgPool) {
    let app = build_app(pool);

    let (_, position) = post_json(&app, "/api/job-positions", position_body("Surveyor")).await;
    let job_id = position["id"].as_i64().unwrap();

    let (status, _) = post_json(&app, "/api/apply", application_body(job_id)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = delete(&app, &format!("/api/job-positions/{job_id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/api/applications").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["jobId"], job_id);

    // Applying against the now-deleted position still succeeds; the
    // reference is advisory.
    let (status, _) = post_json(&app, "/api/apply", application_body(job_id)).await;
    assert_eq!(status, StatusCode::CREATED);
}
