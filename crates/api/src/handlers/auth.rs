//! Admin account registration, login, and password change.
//!
//! Deliberately stateless: a successful login returns an acknowledgement
//! only. There are no sessions or tokens, and no endpoint requires prior
//! authentication.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use stonegate_core::error::CoreError;
use stonegate_core::validate::require_non_empty;
use stonegate_db::models::user::CreateUser;
use stonegate_db::repositories::UserRepo;

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{ApiResult, AppError};
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub email: String,
    pub old_password: String,
    pub new_password: String,
}

/// Body of `POST /api/change-password`.
#[derive(Debug, Serialize)]
pub struct ChangePasswordResponse {
    pub success: bool,
    pub message: String,
}

/// `POST /api/auth/register`
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    require_non_empty("name", &input.name)?;
    require_non_empty("email", &input.email)?;
    validate_password_strength(&input.password)?;

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("User already exists".into()));
    }

    let user = CreateUser {
        name: input.name,
        email: input.email,
        password_hash: hash_password(&input.password)?,
    };
    UserRepo::create(&state.pool, &user).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// `POST /api/auth/login`
///
/// Unknown email and wrong password produce the same response, so the
/// endpoint cannot be used to probe which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> ApiResult<Json<MessageResponse>> {
    require_non_empty("email", &input.email)?;
    require_non_empty("password", &input.password)?;

    let invalid = || AppError::BadRequest("Invalid email or password".into());

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(&input.password, &user.password_hash)? {
        return Err(invalid());
    }

    Ok(Json(MessageResponse::new("Login successful")))
}

/// `POST /api/change-password`
pub async fn change_password(
    State(state): State<AppState>,
    Json(input): Json<ChangePasswordRequest>,
) -> ApiResult<Json<ChangePasswordResponse>> {
    require_non_empty("email", &input.email)?;
    require_non_empty("oldPassword", &input.old_password)?;
    validate_password_strength(&input.new_password)?;

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    if !verify_password(&input.old_password, &user.password_hash)? {
        return Err(CoreError::Unauthorized("Old password is incorrect".into()).into());
    }

    let new_hash = hash_password(&input.new_password)?;
    UserRepo::update_password_hash(&state.pool, user.id, &new_hash).await?;

    Ok(Json(ChangePasswordResponse {
        success: true,
        message: "Password changed successfully".into(),
    }))
}
