//! Handlers for development projects, including the status breakdown and
//! the status-filtered showcase listing.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use stonegate_core::error::CoreError;
use stonegate_core::types::DbId;
use stonegate_core::validate::{require_non_empty, require_positive};
use stonegate_db::models::project::{
    CreateProject, PhaseCount, Project, ProjectPhase, UpdateProject,
};
use stonegate_db::repositories::ProjectRepo;

use crate::error::{ApiResult, AppError};
use crate::response::{ListResponse, MessageResponse, TotalResponse};
use crate::state::AppState;

const DEFAULT_PAGE_LIMIT: i64 = 6;

/// Query parameters for project listings: pagination plus an optional
/// lifecycle-phase filter.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
}

/// Body of `GET /api/projects/status-count`.
#[derive(Debug, Serialize)]
pub struct StatusCountResponse {
    pub success: bool,
    pub data: Vec<PhaseCount>,
}

fn parse_phase(raw: &str) -> ApiResult<ProjectPhase> {
    ProjectPhase::parse(raw).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "status must be one of ongoing, completed, upcoming (got '{raw}')"
        )))
    })
}

fn validate_create(input: &CreateProject) -> Result<(), CoreError> {
    require_non_empty("title", &input.title)?;
    require_non_empty("hoverTitle", &input.hover_title)?;
    require_non_empty("hoverText", &input.hover_text)?;
    require_non_empty("location", &input.location)?;
    require_non_empty("description", &input.description)?;
    require_non_empty("size", &input.size)?;
    require_non_empty("image", &input.image)?;
    require_positive("units", input.units)?;
    require_positive("floors", input.floors)?;
    Ok(())
}

fn validate_update(input: &UpdateProject) -> Result<(), CoreError> {
    if let Some(v) = &input.title {
        require_non_empty("title", v)?;
    }
    if let Some(v) = &input.hover_title {
        require_non_empty("hoverTitle", v)?;
    }
    if let Some(v) = &input.hover_text {
        require_non_empty("hoverText", v)?;
    }
    if let Some(v) = &input.location {
        require_non_empty("location", v)?;
    }
    if let Some(v) = &input.description {
        require_non_empty("description", v)?;
    }
    if let Some(v) = &input.size {
        require_non_empty("size", v)?;
    }
    if let Some(v) = &input.image {
        require_non_empty("image", v)?;
    }
    if let Some(n) = input.units {
        require_positive("units", n)?;
    }
    if let Some(n) = input.floors {
        require_positive("floors", n)?;
    }
    Ok(())
}

/// `POST /api/projects`
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    validate_create(&input)?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// `GET /api/projects?page=&limit=&status=`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> ApiResult<Json<ListResponse<Project>>> {
    let phase = match params.status.as_deref() {
        Some(raw) => Some(parse_phase(raw)?),
        None => None,
    };
    let limit = stonegate_db::clamp_limit(params.limit, DEFAULT_PAGE_LIMIT);
    let offset = stonegate_db::page_offset(params.page, limit);

    let items = ProjectRepo::list_page(&state.pool, phase, limit, offset).await?;
    let total = ProjectRepo::count(&state.pool, phase).await?;
    Ok(Json(ListResponse { items, total }))
}

/// `GET /api/project-status?status=` -- the public showcase listing.
///
/// Unlike `/api/projects`, the status filter is mandatory here.
pub async fn list_by_required_status(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> ApiResult<Json<ListResponse<Project>>> {
    let raw = params.status.as_deref().ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "status query parameter is required".into(),
        ))
    })?;
    let phase = parse_phase(raw)?;

    let limit = stonegate_db::clamp_limit(params.limit, DEFAULT_PAGE_LIMIT);
    let offset = stonegate_db::page_offset(params.page, limit);

    let items = ProjectRepo::list_page(&state.pool, Some(phase), limit, offset).await?;
    let total = ProjectRepo::count(&state.pool, Some(phase)).await?;
    Ok(Json(ListResponse { items, total }))
}

/// `GET /api/projects/{id}`
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "project",
            id,
        })?;
    Ok(Json(project))
}

/// `PUT/PATCH /api/projects/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> ApiResult<Json<Project>> {
    validate_update(&input)?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "project",
            id,
        })?;
    Ok(Json(project))
}

/// `DELETE /api/projects/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<MessageResponse>> {
    let removed = ProjectRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound {
            entity: "project",
            id,
        }
        .into());
    }
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}

/// `GET /api/projects/total`
pub async fn total(State(state): State<AppState>) -> ApiResult<Json<TotalResponse>> {
    let total = ProjectRepo::count(&state.pool, None).await?;
    Ok(Json(TotalResponse { total }))
}

/// `GET /api/projects/status-count` -- dashboard breakdown by phase.
///
/// Phases with no projects are simply absent from `data`.
pub async fn status_count(State(state): State<AppState>) -> ApiResult<Json<StatusCountResponse>> {
    let data = ProjectRepo::count_by_phase(&state.pool).await?;
    Ok(Json(StatusCountResponse {
        success: true,
        data,
    }))
}
