//! Repository for the `job_positions` table.

use sqlx::PgPool;
use stonegate_core::types::DbId;

use crate::models::job_position::{CreateJobPosition, JobPosition, UpdateJobPosition};

const COLUMNS: &str = "id, title, location, description, created_at, updated_at";

/// Provides CRUD operations for open positions.
pub struct JobPositionRepo;

impl JobPositionRepo {
    /// Insert a new position, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateJobPosition,
    ) -> Result<JobPosition, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_positions (title, location, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobPosition>(&query)
            .bind(&input.title)
            .bind(&input.location)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a position by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<JobPosition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_positions WHERE id = $1");
        sqlx::query_as::<_, JobPosition>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a page of positions, most recently created first.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<JobPosition>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_positions \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, JobPosition>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count all positions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM job_positions")
            .fetch_one(pool)
            .await
    }

    /// Update a position. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJobPosition,
    ) -> Result<Option<JobPosition>, sqlx::Error> {
        let query = format!(
            "UPDATE job_positions SET
                title = COALESCE($2, title),
                location = COALESCE($3, location),
                description = COALESCE($4, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobPosition>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.location)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a position by ID. Returns `true` if a row was removed.
    ///
    /// Applications referencing the position are left in place (advisory
    /// reference, no cascade).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_positions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
