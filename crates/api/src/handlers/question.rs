//! Handlers for the `/questions` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use qna_db::models::question::{CreateQuestion, Question};

use crate::error::{AppResult, OrNotFound};
use crate::extract::{JsonBody, PathId};
use crate::state::AppState;

/// GET /api/questions
///
/// Answers are not included in the listing.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Question>>> {
    let questions = state.questions.get_all_questions().await?;
    Ok(Json(questions))
}

/// POST /api/questions
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateQuestion>,
) -> AppResult<(StatusCode, Json<Question>)> {
    input.validate()?;
    let question = state.questions.create_question(&input).await?;
    tracing::info!(question_id = question.id, "Question created");
    Ok((StatusCode::CREATED, Json(question)))
}

/// GET /api/questions/{id}
///
/// The question is returned with its answers.
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Question>> {
    let question = state
        .questions
        .get_question(id)
        .await
        .or_not_found("Question", id)?;
    Ok(Json(question))
}

/// DELETE /api/questions/{id}
pub async fn delete(State(state): State<AppState>, PathId(id): PathId) -> AppResult<StatusCode> {
    state
        .questions
        .delete_question(id)
        .await
        .or_not_found("Question", id)?;
    tracing::info!(question_id = id, "Question deleted");
    Ok(StatusCode::NO_CONTENT)
}
