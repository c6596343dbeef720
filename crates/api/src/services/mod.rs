//! Orchestration layer between handlers and the repository gateway.
//!
//! Services hold their repositories as trait objects so the same handlers run
//! against PostgreSQL in production and in-memory fakes in tests. Store errors
//! pass through unchanged; the only re-tagging is [`ServiceError::QuestionNotFound`].

pub mod answer;
pub mod question;

pub use answer::AnswerService;
pub use question::QuestionService;

use qna_core::types::DbId;

/// Errors surfaced by the service layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// An answer was submitted for a question that does not exist.
    #[error("question {question_id} not found")]
    QuestionNotFound { question_id: DbId },

    /// Any error from the backing store, including `RowNotFound`.
    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
