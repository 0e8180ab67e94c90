//! Handlers for blog posts.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use stonegate_core::error::CoreError;
use stonegate_core::types::DbId;
use stonegate_core::validate::require_non_empty;
use stonegate_db::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};
use stonegate_db::repositories::BlogPostRepo;

use crate::error::ApiResult;
use crate::query::PageParams;
use crate::response::{ListResponse, MessageResponse, TotalResponse};
use crate::state::AppState;

const DEFAULT_PAGE_LIMIT: i64 = 6;

fn validate_create(input: &CreateBlogPost) -> Result<(), CoreError> {
    require_non_empty("title", &input.title)?;
    require_non_empty("description", &input.description)?;
    require_non_empty("author", &input.author)?;
    require_non_empty("imageUrl", &input.image_url)?;
    Ok(())
}

fn validate_update(input: &UpdateBlogPost) -> Result<(), CoreError> {
    if let Some(v) = &input.title {
        require_non_empty("title", v)?;
    }
    if let Some(v) = &input.description {
        require_non_empty("description", v)?;
    }
    if let Some(v) = &input.author {
        require_non_empty("author", v)?;
    }
    if let Some(v) = &input.image_url {
        require_non_empty("imageUrl", v)?;
    }
    Ok(())
}

/// `POST /api/blog-posts`
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBlogPost>,
) -> ApiResult<(StatusCode, Json<BlogPost>)> {
    validate_create(&input)?;
    let post = BlogPostRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// `GET /api/blog-posts?page=&limit=`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<ListResponse<BlogPost>>> {
    let (limit, offset) = params.resolve(DEFAULT_PAGE_LIMIT);
    let items = BlogPostRepo::list_page(&state.pool, limit, offset).await?;
    let total = BlogPostRepo::count(&state.pool).await?;
    Ok(Json(ListResponse { items, total }))
}

/// `GET /api/blog-posts/{id}`
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<BlogPost>> {
    let post = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "blog post",
            id,
        })?;
    Ok(Json(post))
}

/// `PUT/PATCH /api/blog-posts/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> ApiResult<Json<BlogPost>> {
    validate_update(&input)?;
    let post = BlogPostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "blog post",
            id,
        })?;
    Ok(Json(post))
}

/// `DELETE /api/blog-posts/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<MessageResponse>> {
    let removed = BlogPostRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound {
            entity: "blog post",
            id,
        }
        .into());
    }
    Ok(Json(MessageResponse::new("Blog post deleted successfully")))
}

/// `GET /api/blog-posts/total`
pub async fn total(State(state): State<AppState>) -> ApiResult<Json<TotalResponse>> {
    let total = BlogPostRepo::count(&state.pool).await?;
    Ok(Json(TotalResponse { total }))
}
