//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers extract and validate input, delegate to the corresponding service
//! in [`AppState`](crate::state::AppState), and map errors via
//! [`AppError`](crate::error::AppError).

pub mod answer;
pub mod question;
