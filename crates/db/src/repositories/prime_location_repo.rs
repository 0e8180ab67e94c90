//! Repository for the `prime_locations` table.

use sqlx::PgPool;
use stonegate_core::types::DbId;

use crate::models::prime_location::{CreatePrimeLocation, PrimeLocation, UpdatePrimeLocation};

const COLUMNS: &str = "id, name, description, image, created_at, updated_at";

/// Provides CRUD operations for prime locations.
pub struct PrimeLocationRepo;

impl PrimeLocationRepo {
    /// Insert a new prime location, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePrimeLocation,
    ) -> Result<PrimeLocation, sqlx::Error> {
        let query = format!(
            "INSERT INTO prime_locations (name, description, image)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PrimeLocation>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Find a prime location by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PrimeLocation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prime_locations WHERE id = $1");
        sqlx::query_as::<_, PrimeLocation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a page of prime locations, most recently created first.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PrimeLocation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prime_locations \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, PrimeLocation>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count all prime locations.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM prime_locations")
            .fetch_one(pool)
            .await
    }

    /// Update a prime location. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePrimeLocation,
    ) -> Result<Option<PrimeLocation>, sqlx::Error> {
        let query = format!(
            "UPDATE prime_locations SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                image = COALESCE($4, image),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PrimeLocation>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a prime location by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prime_locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
