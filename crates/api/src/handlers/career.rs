//! Handlers for the careers area: open positions and candidate applications.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use stonegate_core::error::CoreError;
use stonegate_core::types::DbId;
use stonegate_core::validate::require_non_empty;
use stonegate_db::models::job_application::{CreateJobApplication, JobApplication};
use stonegate_db::models::job_position::{CreateJobPosition, JobPosition, UpdateJobPosition};
use stonegate_db::repositories::{JobApplicationRepo, JobPositionRepo};

use crate::error::ApiResult;
use crate::query::PageParams;
use crate::response::{ListResponse, MessageResponse, TotalResponse};
use crate::state::AppState;

const DEFAULT_PAGE_LIMIT: i64 = 6;
const DEFAULT_APPLICATIONS_LIMIT: i64 = 10;

fn validate_position_create(input: &CreateJobPosition) -> Result<(), CoreError> {
    require_non_empty("title", &input.title)?;
    require_non_empty("location", &input.location)?;
    require_non_empty("description", &input.description)?;
    Ok(())
}

fn validate_position_update(input: &UpdateJobPosition) -> Result<(), CoreError> {
    if let Some(v) = &input.title {
        require_non_empty("title", v)?;
    }
    if let Some(v) = &input.location {
        require_non_empty("location", v)?;
    }
    if let Some(v) = &input.description {
        require_non_empty("description", v)?;
    }
    Ok(())
}

/// `POST /api/job-positions`
pub async fn create_position(
    State(state): State<AppState>,
    Json(input): Json<CreateJobPosition>,
) -> ApiResult<(StatusCode, Json<JobPosition>)> {
    validate_position_create(&input)?;
    let position = JobPositionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(position)))
}

/// `GET /api/job-positions?page=&limit=`
pub async fn list_positions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<ListResponse<JobPosition>>> {
    let (limit, offset) = params.resolve(DEFAULT_PAGE_LIMIT);
    let items = JobPositionRepo::list_page(&state.pool, limit, offset).await?;
    let total = JobPositionRepo::count(&state.pool).await?;
    Ok(Json(ListResponse { items, total }))
}

/// `GET /api/job-positions/{id}`
pub async fn get_position(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<JobPosition>> {
    let position = JobPositionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "job position",
            id,
        })?;
    Ok(Json(position))
}

/// `PUT/PATCH /api/job-positions/{id}`
pub async fn update_position(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateJobPosition>,
) -> ApiResult<Json<JobPosition>> {
    validate_position_update(&input)?;
    let position = JobPositionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "job position",
            id,
        })?;
    Ok(Json(position))
}

/// `DELETE /api/job-positions/{id}`
///
/// Existing applications referencing the position are left untouched.
pub async fn delete_position(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<MessageResponse>> {
    let removed = JobPositionRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound {
            entity: "job position",
            id,
        }
        .into());
    }
    Ok(Json(MessageResponse::new(
        "Job position deleted successfully",
    )))
}

/// `GET /api/job-positions/total`
pub async fn positions_total(State(state): State<AppState>) -> ApiResult<Json<TotalResponse>> {
    let total = JobPositionRepo::count(&state.pool).await?;
    Ok(Json(TotalResponse { total }))
}

/// `POST /api/apply` -- public application submission.
///
/// The referenced position is not checked for existence, and repeat
/// applications from the same candidate are accepted.
pub async fn apply(
    State(state): State<AppState>,
    Json(input): Json<CreateJobApplication>,
) -> ApiResult<(StatusCode, Json<JobApplication>)> {
    require_non_empty("name", &input.name)?;
    require_non_empty("email", &input.email)?;
    require_non_empty("cvUrl", &input.cv_url)?;
    if input.job_id <= 0 {
        return Err(CoreError::Validation("jobId must be a positive number".into()).into());
    }

    let application = JobApplicationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// `GET /api/applications?page=&limit=` -- admin review listing.
pub async fn list_applications(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<ListResponse<JobApplication>>> {
    let (limit, offset) = params.resolve(DEFAULT_APPLICATIONS_LIMIT);
    let items = JobApplicationRepo::list_page(&state.pool, limit, offset).await?;
    let total = JobApplicationRepo::count(&state.pool).await?;
    Ok(Json(ListResponse { items, total }))
}
