//! Open job position entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stonegate_core::types::{DbId, Timestamp};

/// A job position row from the `job_positions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosition {
    pub id: DbId,
    pub title: String,
    pub location: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a job position.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPosition {
    pub title: String,
    pub location: String,
    pub description: String,
}

/// DTO for updating a job position. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobPosition {
    pub title: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}
