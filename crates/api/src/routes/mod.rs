pub mod answer;
pub mod health;
pub mod question;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /questions                      list, create
/// /questions/{id}                 get (with answers), delete
/// /questions/{id}/answers         create answer
///
/// /answers/{id}                   get, delete
/// ```
///
/// Any other method on these paths is answered with 405 by the router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(question::router())
        .merge(answer::router())
}
