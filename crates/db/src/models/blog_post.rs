//! Blog post entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stonegate_core::types::{DbId, Timestamp};

/// A blog post row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub author: String,
    pub categories: Vec<String>,
    pub image_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new blog post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPost {
    pub title: String,
    pub description: String,
    pub author: String,
    #[serde(default)]
    pub categories: Vec<String>,
    pub image_url: String,
}

/// DTO for updating an existing blog post. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPost {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub categories: Option<Vec<String>>,
    pub image_url: Option<String>,
}
