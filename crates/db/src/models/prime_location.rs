//! Prime location showcase entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stonegate_core::types::{DbId, Timestamp};

/// A prime location row from the `prime_locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimeLocation {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a prime location.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrimeLocation {
    pub name: String,
    pub description: String,
    pub image: String,
}

/// DTO for updating a prime location. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrimeLocation {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}
