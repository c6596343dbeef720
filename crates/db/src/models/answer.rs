//! Answer entity model and DTOs.

use qna_core::error::CoreError;
use qna_core::types::{DbId, Timestamp};
use qna_core::validation::{validate_text, validate_user_id};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An answer row from the `answers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Answer {
    pub id: DbId,
    pub question_id: DbId,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: Timestamp,
}

/// Request body for answering a question.
///
/// The owning question comes from the URL path, not the body. Missing
/// `text`/`user_id` deserialize to empty/nil so that `validate()` reports them.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnswer {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub user_id: Uuid,
    /// Carried through to the row when supplied; defaults to `NOW()`.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl CreateAnswer {
    /// Text rules run first, then the user id check.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_text(&self.text)?;
        validate_user_id(&self.user_id)
    }
}

/// Fully-resolved insert for the `answers` table.
#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub question_id: DbId,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: Option<Timestamp>,
}

impl NewAnswer {
    /// Attach a validated request body to its question.
    pub fn for_question(question_id: DbId, input: CreateAnswer) -> Self {
        Self {
            question_id,
            user_id: input.user_id,
            text: input.text,
            created_at: input.created_at,
        }
    }
}
