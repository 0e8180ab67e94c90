//! News and event entries (a single table distinguished by `kind`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stonegate_core::types::{DbId, Timestamp};

/// Whether an entry is a news item or an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "news_event_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NewsEventKind {
    News,
    Event,
}

/// A news/event row from the `news_events` table.
///
/// `date` is a free-form display string, not a validated calendar date.
/// `location` is only meaningful for events by convention; nothing
/// enforces that.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsEvent {
    pub id: DbId,
    #[serde(rename = "type")]
    pub kind: NewsEventKind,
    pub title: String,
    pub date: String,
    pub summary: String,
    pub location: Option<String>,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a news/event entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsEvent {
    #[serde(rename = "type")]
    pub kind: NewsEventKind,
    pub title: String,
    pub date: String,
    pub summary: String,
    pub location: Option<String>,
    pub image: String,
}

/// DTO for updating a news/event entry. All fields are optional.
///
/// `location` is the one nullable column, so it distinguishes "absent"
/// (keep the stored value) from an explicit `null` (clear it), e.g. when
/// an event is reclassified as a news item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsEvent {
    #[serde(rename = "type")]
    pub kind: Option<NewsEventKind>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub location: Option<Option<String>>,
    pub image: Option<String>,
}

/// Wraps a present field (including an explicit `null`) in `Some`, leaving
/// absent fields as `None` via `#[serde(default)]`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
