//! Database access layer: pool construction, embedded migrations, typed
//! row models, and per-entity repositories.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Hard ceiling on page sizes, regardless of what the client asks for.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round-trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations embedded from `migrations/`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Clamp a requested page size into `1..=MAX_PAGE_LIMIT`, falling back to
/// the entity's default when absent or non-positive.
pub fn clamp_limit(requested: Option<i64>, default: i64) -> i64 {
    match requested {
        Some(n) if n >= 1 => n.min(MAX_PAGE_LIMIT),
        _ => default,
    }
}

/// Convert a 1-based page number into a row offset. Pages below 1 are
/// treated as page 1.
pub fn page_offset(page: Option<i64>, limit: i64) -> i64 {
    let page = page.unwrap_or(1).max(1);
    (page - 1) * limit
}
