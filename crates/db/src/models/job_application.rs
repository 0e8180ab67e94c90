//! Candidate application against an open position.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stonegate_core::types::{DbId, Timestamp};

/// A job application row from the `job_applications` table.
///
/// `job_id` is an advisory reference to a position; the row survives the
/// position being deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub job_id: DbId,
    /// Public URL of the previously uploaded resume.
    pub cv_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting an application.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobApplication {
    pub name: String,
    pub email: String,
    pub job_id: DbId,
    pub cv_url: String,
}
