//! Question entity model and DTOs.

use qna_core::error::CoreError;
use qna_core::types::{DbId, Timestamp};
use qna_core::validation::validate_text;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::answer::Answer;

/// A question row from the `questions` table.
///
/// `answers` is only populated when the question is loaded on its own
/// (see `QuestionRepository::find_by_id`); listings leave it `None` and it is
/// then omitted from the JSON body.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub text: String,
    pub created_at: Timestamp,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<Answer>>,
}

/// DTO for creating a new question.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestion {
    #[serde(default)]
    pub text: String,
}

impl CreateQuestion {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_text(&self.text)
    }
}
