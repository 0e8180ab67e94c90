//! Repository for the `job_applications` table.

use sqlx::PgPool;

use crate::models::job_application::{CreateJobApplication, JobApplication};

const COLUMNS: &str = "id, name, email, job_id, cv_url, created_at, updated_at";

/// Stores candidate applications. Intentionally insert-and-list only:
/// applications are never edited through the API.
pub struct JobApplicationRepo;

impl JobApplicationRepo {
    /// Insert a new application, returning the created row.
    ///
    /// `job_id` is not checked for existence; the same candidate may apply
    /// to the same position any number of times.
    pub async fn create(
        pool: &PgPool,
        input: &CreateJobApplication,
    ) -> Result<JobApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_applications (name, email, job_id, cv_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.job_id)
            .bind(&input.cv_url)
            .fetch_one(pool)
            .await
    }

    /// List a page of applications, most recently submitted first.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<JobApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_applications \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count all applications.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM job_applications")
            .fetch_one(pool)
            .await
    }
}
