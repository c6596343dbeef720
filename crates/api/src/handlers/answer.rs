//! Handlers for the `/answers` resource.
//!
//! Answers are created under their question:
//! `/questions/{id}/answers`, and read or deleted directly: `/answers/{id}`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use qna_db::models::answer::{Answer, CreateAnswer};

use crate::error::{AppResult, OrNotFound};
use crate::extract::{JsonBody, PathId};
use crate::state::AppState;

/// POST /api/questions/{id}/answers
///
/// The owning question comes from the URL path; a missing question yields
/// 404 `QUESTION_NOT_FOUND`.
pub async fn create(
    State(state): State<AppState>,
    PathId(question_id): PathId,
    JsonBody(input): JsonBody<CreateAnswer>,
) -> AppResult<(StatusCode, Json<Answer>)> {
    input.validate()?;
    let answer = state.answers.create_answer(question_id, input).await?;
    tracing::info!(question_id, answer_id = answer.id, "Answer created");
    Ok((StatusCode::CREATED, Json(answer)))
}

/// GET /api/answers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Answer>> {
    let answer = state
        .answers
        .get_answer(id)
        .await
        .or_not_found("Answer", id)?;
    Ok(Json(answer))
}

/// DELETE /api/answers/{id}
pub async fn delete(State(state): State<AppState>, PathId(id): PathId) -> AppResult<StatusCode> {
    state
        .answers
        .delete_answer(id)
        .await
        .or_not_found("Answer", id)?;
    tracing::info!(answer_id = id, "Answer deleted");
    Ok(StatusCode::NO_CONTENT)
}
