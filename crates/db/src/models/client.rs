//! Showcased client/partner logo entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stonegate_core::types::{DbId, Timestamp};

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: DbId,
    pub name: String,
    /// Public URL of the hosted logo image.
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new client. The image URL comes from the upload step
/// of the multipart workflow, not from the request body.
#[derive(Debug, Clone)]
pub struct CreateClient {
    pub name: String,
    pub image: String,
}

/// DTO for updating an existing client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClient {
    pub name: Option<String>,
    pub image: Option<String>,
}
