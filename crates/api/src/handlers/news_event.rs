//! Handlers for news and event entries.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use stonegate_core::error::CoreError;
use stonegate_core::types::DbId;
use stonegate_core::validate::require_non_empty;
use stonegate_db::models::news_event::{CreateNewsEvent, NewsEvent, UpdateNewsEvent};
use stonegate_db::repositories::NewsEventRepo;

use crate::error::ApiResult;
use crate::query::PageParams;
use crate::response::{ListResponse, MessageResponse, TotalResponse};
use crate::state::AppState;

const DEFAULT_PAGE_LIMIT: i64 = 6;

fn validate_create(input: &CreateNewsEvent) -> Result<(), CoreError> {
    require_non_empty("title", &input.title)?;
    require_non_empty("date", &input.date)?;
    require_non_empty("summary", &input.summary)?;
    require_non_empty("image", &input.image)?;
    Ok(())
}

fn validate_update(input: &UpdateNewsEvent) -> Result<(), CoreError> {
    if let Some(v) = &input.title {
        require_non_empty("title", v)?;
    }
    if let Some(v) = &input.date {
        require_non_empty("date", v)?;
    }
    if let Some(v) = &input.summary {
        require_non_empty("summary", v)?;
    }
    if let Some(v) = &input.image {
        require_non_empty("image", v)?;
    }
    Ok(())
}

/// `POST /api/news-events`
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNewsEvent>,
) -> ApiResult<(StatusCode, Json<NewsEvent>)> {
    validate_create(&input)?;
    let entry = NewsEventRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// `GET /api/news-events?page=&limit=`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<ListResponse<NewsEvent>>> {
    let (limit, offset) = params.resolve(DEFAULT_PAGE_LIMIT);
    let items = NewsEventRepo::list_page(&state.pool, limit, offset).await?;
    let total = NewsEventRepo::count(&state.pool).await?;
    Ok(Json(ListResponse { items, total }))
}

/// `GET /api/news-events/{id}`
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<NewsEvent>> {
    let entry = NewsEventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "news/event entry",
            id,
        })?;
    Ok(Json(entry))
}

/// `PUT/PATCH /api/news-events/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNewsEvent>,
) -> ApiResult<Json<NewsEvent>> {
    validate_update(&input)?;
    let entry = NewsEventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "news/event entry",
            id,
        })?;
    Ok(Json(entry))
}

/// `DELETE /api/news-events/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<MessageResponse>> {
    let removed = NewsEventRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound {
            entity: "news/event entry",
            id,
        }
        .into());
    }
    Ok(Json(MessageResponse::new("Entry deleted successfully")))
}

/// `GET /api/news-events/total`
pub async fn total(State(state): State<AppState>) -> ApiResult<Json<TotalResponse>> {
    let total = NewsEventRepo::count(&state.pool).await?;
    Ok(Json(TotalResponse { total }))
}
