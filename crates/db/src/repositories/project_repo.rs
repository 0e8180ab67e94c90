//! Repository for the `projects` table.

use sqlx::PgPool;
use stonegate_core::types::DbId;

use crate::models::project::{
    CreateProject, PhaseCount, Project, ProjectPhase, UpdateProject,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, hover_title, hover_text, location, status, description, \
     size, units, floors, amenities, image, created_at, updated_at";

/// Provides CRUD operations and aggregations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, hover_title, hover_text, location, status, \
                 description, size, units, floors, amenities, image)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.hover_title)
            .bind(&input.hover_text)
            .bind(&input.location)
            .bind(input.status)
            .bind(&input.description)
            .bind(&input.size)
            .bind(input.units)
            .bind(input.floors)
            .bind(&input.amenities)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a page of projects, most recently created first, optionally
    /// filtered by lifecycle phase.
    pub async fn list_page(
        pool: &PgPool,
        status: Option<ProjectPhase>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects \
             WHERE ($1::project_phase IS NULL OR status = $1) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count all projects, optionally filtered by phase.
    pub async fn count(pool: &PgPool, status: Option<ProjectPhase>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM projects WHERE ($1::project_phase IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(pool)
        .await
    }

    /// Group projects by phase for the dashboard status breakdown.
    pub async fn count_by_phase(pool: &PgPool) -> Result<Vec<PhaseCount>, sqlx::Error> {
        sqlx::query_as::<_, PhaseCount>(
            "SELECT status, COUNT(*) AS count FROM projects GROUP BY status",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                hover_title = COALESCE($3, hover_title),
                hover_text = COALESCE($4, hover_text),
                location = COALESCE($5, location),
                status = COALESCE($6, status),
                description = COALESCE($7, description),
                size = COALESCE($8, size),
                units = COALESCE($9, units),
                floors = COALESCE($10, floors),
                amenities = COALESCE($11, amenities),
                image = COALESCE($12, image),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.hover_title)
            .bind(&input.hover_text)
            .bind(&input.location)
            .bind(input.status)
            .bind(&input.description)
            .bind(&input.size)
            .bind(input.units)
            .bind(input.floors)
            .bind(&input.amenities)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
