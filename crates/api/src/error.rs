use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use stonegate_core::error::CoreError;

use crate::uploads::UploadError;

/// API error type that converts into HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("image upload failed: {0}")]
    Upload(#[from] UploadError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Core(CoreError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            AppError::Core(CoreError::Conflict(_)) => (StatusCode::CONFLICT, "CONFLICT"),
            AppError::Core(CoreError::Unauthorized(_)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
            }
            AppError::Core(CoreError::Forbidden(_)) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AppError::Core(CoreError::Internal(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
            AppError::Database(e) => return classify_sqlx_error(e),
            AppError::Upload(_) => (StatusCode::INTERNAL_SERVER_ERROR, "UPLOAD_FAILED"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

/// Map sqlx errors onto HTTP semantics.
///
/// Unique-constraint violations on our `uq_*` constraints become 409s so
/// callers get an actionable answer instead of a generic 500. Anything else
/// is logged server-side and sanitized.
fn classify_sqlx_error(e: &sqlx::Error) -> (StatusCode, &'static str) {
    match e {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        sqlx::Error::Database(db) => {
            let is_unique = db.code().as_deref() == Some("23505")
                && db.constraint().is_some_and(|c| c.starts_with("uq_"));
            if is_unique {
                (StatusCode::CONFLICT, "CONFLICT")
            } else {
                tracing::error!(error = %db, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR")
            }
        }
        other => {
            tracing::error!(error = %other, "database error");
            (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR")
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never leak internals in 5xx bodies.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            match &self {
                AppError::Upload(_) => "Image upload failed".to_string(),
                _ => "Internal server error".to_string(),
            }
        } else {
            self.to_string()
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(json!({ "error": message, "code": code }))).into_response()
    }
}

/// Handler result alias used throughout the API crate.
pub type ApiResult<T> = Result<T, AppError>;
