//! Handlers for showcased clients.
//!
//! Creation is the one write path in the API that accepts a file: the logo
//! arrives as multipart form data, is pushed to the external image host,
//! and only the resulting public URL is persisted.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use stonegate_core::error::CoreError;
use stonegate_core::types::DbId;
use stonegate_core::validate::require_non_empty;
use stonegate_db::models::client::{Client, CreateClient, UpdateClient};
use stonegate_db::repositories::ClientRepo;

use crate::error::{ApiResult, AppError};
use crate::query::PageParams;
use crate::response::{ListResponse, MessageResponse, TotalResponse};
use crate::state::AppState;

const DEFAULT_PAGE_LIMIT: i64 = 6;

fn bad_multipart(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::BadRequest(format!("invalid multipart body: {e}"))
}

/// `POST /api/clients` -- multipart form with a `name` text field and an
/// `image` file field.
///
/// The upload happens before the insert. If the insert then fails, the
/// freshly uploaded asset is deleted best-effort so the host does not
/// accumulate orphans.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<Client>)> {
    let mut name: Option<String> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let field_name = field.name().map(str::to_owned);
        match field_name.as_deref() {
            Some("name") => name = Some(field.text().await.map_err(bad_multipart)?),
            Some("image") => {
                let filename = field.file_name().unwrap_or("upload").to_owned();
                let bytes = field.bytes().await.map_err(bad_multipart)?.to_vec();
                file = Some((filename, bytes));
            }
            _ => {}
        }
    }

    let name = name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| CoreError::Validation("name is required".into()))?;
    let (filename, bytes) = file
        .filter(|(_, bytes)| !bytes.is_empty())
        .ok_or_else(|| CoreError::Validation("image file is required".into()))?;

    let stored = state.image_store.upload("clients", &filename, bytes).await?;

    let input = CreateClient {
        name,
        image: stored.url.clone(),
    };
    match ClientRepo::create(&state.pool, &input).await {
        Ok(client) => Ok((StatusCode::CREATED, Json(client))),
        Err(e) => {
            if let Err(cleanup) = state.image_store.delete(&stored.public_id).await {
                tracing::warn!(
                    public_id = %stored.public_id,
                    error = %cleanup,
                    "failed to remove orphaned upload after insert failure"
                );
            }
            Err(e.into())
        }
    }
}

/// `GET /api/clients?page=&limit=`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<ListResponse<Client>>> {
    let (limit, offset) = params.resolve(DEFAULT_PAGE_LIMIT);
    let items = ClientRepo::list_page(&state.pool, limit, offset).await?;
    let total = ClientRepo::count(&state.pool).await?;
    Ok(Json(ListResponse { items, total }))
}

/// `GET /api/clients/{id}`
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "client",
            id,
        })?;
    Ok(Json(client))
}

/// `PUT/PATCH /api/clients/{id}` -- JSON body; the image field, when
/// present, is expected to already be a hosted URL.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClient>,
) -> ApiResult<Json<Client>> {
    if let Some(v) = &input.name {
        require_non_empty("name", v)?;
    }
    if let Some(v) = &input.image {
        require_non_empty("image", v)?;
    }
    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "client",
            id,
        })?;
    Ok(Json(client))
}

/// `DELETE /api/clients/{id}`
///
/// Removes the row only. The hosted image is left in place; it is owned by
/// the hosting account, not by this service.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<MessageResponse>> {
    let removed = ClientRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound {
            entity: "client",
            id,
        }
        .into());
    }
    Ok(Json(MessageResponse::new("Client deleted successfully")))
}

/// `GET /api/clients/total`
pub async fn total(State(state): State<AppState>) -> ApiResult<Json<TotalResponse>> {
    let total = ClientRepo::count(&state.pool).await?;
    Ok(Json(TotalResponse { total }))
}
