//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stonegate_core::types::{DbId, Timestamp};

/// Lifecycle phase of a development project.
///
/// A closed enumeration with no transition rules: any phase may be set to
/// any other at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_phase", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectPhase {
    Ongoing,
    Completed,
    Upcoming,
}

impl ProjectPhase {
    /// Parse a query-string value. Returns `None` for anything outside the
    /// closed set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ongoing" => Some(Self::Ongoing),
            "completed" => Some(Self::Completed),
            "upcoming" => Some(Self::Upcoming),
            _ => None,
        }
    }
}

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub hover_title: String,
    pub hover_text: String,
    pub location: String,
    pub status: ProjectPhase,
    pub description: String,
    pub size: String,
    pub units: i32,
    pub floors: i32,
    pub amenities: Vec<String>,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: String,
    pub hover_title: String,
    pub hover_text: String,
    pub location: String,
    pub status: ProjectPhase,
    pub description: String,
    pub size: String,
    pub units: i32,
    pub floors: i32,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub image: String,
}

/// DTO for updating an existing project. All fields are optional; omitted
/// fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub hover_title: Option<String>,
    pub hover_text: Option<String>,
    pub location: Option<String>,
    pub status: Option<ProjectPhase>,
    pub description: Option<String>,
    pub size: Option<String>,
    pub units: Option<i32>,
    pub floors: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub image: Option<String>,
}

/// One row of the status breakdown widget.
///
/// The `_id` key is what the dashboard consumes; it is kept verbatim from
/// the original API shape.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhaseCount {
    #[serde(rename = "_id")]
    pub status: ProjectPhase,
    pub count: i64,
}
