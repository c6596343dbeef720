//! Repository layer.
//!
//! Each entity has a capability trait (held by the service layer as
//! `Arc<dyn ...>`) and a PostgreSQL implementation wrapping a `PgPool`.
//! Errors are returned as raw `sqlx::Error`; an absent row is always
//! `sqlx::Error::RowNotFound`.

pub mod answer_repo;
pub mod question_repo;

pub use answer_repo::{AnswerRepository, PgAnswerRepo};
pub use question_repo::{PgQuestionRepo, QuestionRepository};
