use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use qna_core::error::CoreError;
use qna_core::types::DbId;
use serde_json::json;

use crate::services::{ServiceError, ServiceResult};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`ServiceError`] for outcomes of
/// the service layer, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `qna_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error returned by a service.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Service outcomes ---
            AppError::Service(ServiceError::QuestionNotFound { .. }) => (
                StatusCode::NOT_FOUND,
                "QUESTION_NOT_FOUND",
                "Question not found".to_string(),
            ),
            AppError::Service(ServiceError::Store(err)) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Re-tag a store `RowNotFound` as a not-found for a specific entity.
///
/// ```ignore
/// let answer = state.answers.get_answer(id).await.or_not_found("Answer", id)?;
/// ```
pub trait OrNotFound<T> {
    fn or_not_found(self, entity: &'static str, id: DbId) -> AppResult<T>;
}

impl<T> OrNotFound<T> for ServiceResult<T> {
    fn or_not_found(self, entity: &'static str, id: DbId) -> AppResult<T> {
        self.map_err(|err| match err {
            ServiceError::Store(sqlx::Error::RowNotFound) => {
                AppError::Core(CoreError::NotFound { entity, id })
            }
            other => AppError::Service(other),
        })
    }
}
