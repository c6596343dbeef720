//! Route definitions for the `/questions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{answer, question};
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// GET    /questions                -> list
/// POST   /questions                -> create
/// GET    /questions/{id}           -> get_by_id
/// DELETE /questions/{id}           -> delete
/// POST   /questions/{id}/answers   -> answer::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(question::list).post(question::create))
        .route(
            "/questions/{id}",
            get(question::get_by_id).delete(question::delete),
        )
        .route("/questions/{id}/answers", post(answer::create))
}
