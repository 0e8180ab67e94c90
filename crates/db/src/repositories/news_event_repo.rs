//! Repository for the `news_events` table.

use sqlx::PgPool;
use stonegate_core::types::DbId;

use crate::models::news_event::{CreateNewsEvent, NewsEvent, UpdateNewsEvent};

const COLUMNS: &str =
    "id, kind, title, date, summary, location, image, created_at, updated_at";

/// Provides CRUD operations for news and event entries.
pub struct NewsEventRepo;

impl NewsEventRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateNewsEvent) -> Result<NewsEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO news_events (kind, title, date, summary, location, image)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsEvent>(&query)
            .bind(input.kind)
            .bind(&input.title)
            .bind(&input.date)
            .bind(&input.summary)
            .bind(&input.location)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<NewsEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news_events WHERE id = $1");
        sqlx::query_as::<_, NewsEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a page of entries, most recently created first.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<NewsEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM news_events \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, NewsEvent>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count all entries.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM news_events")
            .fetch_one(pool)
            .await
    }

    /// Update an entry. Only provided fields in `input` are applied.
    ///
    /// `location` is nullable, so it carries its own "was it provided" flag
    /// instead of relying on COALESCE; an explicit null clears the column.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNewsEvent,
    ) -> Result<Option<NewsEvent>, sqlx::Error> {
        let query = format!(
            "UPDATE news_events SET
                kind = COALESCE($2, kind),
                title = COALESCE($3, title),
                date = COALESCE($4, date),
                summary = COALESCE($5, summary),
                location = CASE WHEN $6 THEN $7 ELSE location END,
                image = COALESCE($8, image),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsEvent>(&query)
            .bind(id)
            .bind(input.kind)
            .bind(&input.title)
            .bind(&input.date)
            .bind(&input.summary)
            .bind(input.location.is_some())
            .bind(input.location.as_ref().and_then(|loc| loc.as_deref()))
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news_events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
