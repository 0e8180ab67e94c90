//! Handlers for prime locations.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use stonegate_core::error::CoreError;
use stonegate_core::types::DbId;
use stonegate_core::validate::require_non_empty;
use stonegate_db::models::prime_location::{
    CreatePrimeLocation, PrimeLocation, UpdatePrimeLocation,
};
use stonegate_db::repositories::PrimeLocationRepo;

use crate::error::ApiResult;
use crate::query::PageParams;
use crate::response::{ListResponse, MessageResponse, TotalResponse};
use crate::state::AppState;

// The landing page shows locations three at a time.
const DEFAULT_PAGE_LIMIT: i64 = 3;

fn validate_create(input: &CreatePrimeLocation) -> Result<(), CoreError> {
    require_non_empty("name", &input.name)?;
    require_non_empty("description", &input.description)?;
    require_non_empty("image", &input.image)?;
    Ok(())
}

fn validate_update(input: &UpdatePrimeLocation) -> Result<(), CoreError> {
    if let Some(v) = &input.name {
        require_non_empty("name", v)?;
    }
    if let Some(v) = &input.description {
        require_non_empty("description", v)?;
    }
    if let Some(v) = &input.image {
        require_non_empty("image", v)?;
    }
    Ok(())
}

/// `POST /api/prime-locations`
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePrimeLocation>,
) -> ApiResult<(StatusCode, Json<PrimeLocation>)> {
    validate_create(&input)?;
    let location = PrimeLocationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

/// `GET /api/prime-locations?page=&limit=`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<ListResponse<PrimeLocation>>> {
    let (limit, offset) = params.resolve(DEFAULT_PAGE_LIMIT);
    let items = PrimeLocationRepo::list_page(&state.pool, limit, offset).await?;
    let total = PrimeLocationRepo::count(&state.pool).await?;
    Ok(Json(ListResponse { items, total }))
}

/// `GET /api/prime-locations/{id}`
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<PrimeLocation>> {
    let location = PrimeLocationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "prime location",
            id,
        })?;
    Ok(Json(location))
}

/// `PUT/PATCH /api/prime-locations/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePrimeLocation>,
) -> ApiResult<Json<PrimeLocation>> {
    validate_update(&input)?;
    let location = PrimeLocationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "prime location",
            id,
        })?;
    Ok(Json(location))
}

/// `DELETE /api/prime-locations/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<MessageResponse>> {
    let removed = PrimeLocationRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound {
            entity: "prime location",
            id,
        }
        .into());
    }
    Ok(Json(MessageResponse::new(
        "Prime location deleted successfully",
    )))
}

/// `GET /api/prime-locations/total`
pub async fn total(State(state): State<AppState>) -> ApiResult<Json<TotalResponse>> {
    let total = PrimeLocationRepo::count(&state.pool).await?;
    Ok(Json(TotalResponse { total }))
}
