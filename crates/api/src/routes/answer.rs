//! Route definitions for the `/answers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::answer;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// GET    /answers/{id}   -> get_by_id
/// DELETE /answers/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/answers/{id}", get(answer::get_by_id).delete(answer::delete))
}
