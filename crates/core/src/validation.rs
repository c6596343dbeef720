//! Field-level validation rules for question and answer input.
//!
//! Text fields are checked on their trimmed form; the original value is what
//! gets persisted.

use uuid::Uuid;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Text length limits
// ---------------------------------------------------------------------------

/// Minimum length of question/answer text, in characters, after trimming.
pub const MIN_TEXT_LEN: usize = 5;

/// Maximum length of question/answer text, in characters, after trimming.
pub const MAX_TEXT_LEN: usize = 1000;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a question or answer body.
///
/// Surrounding whitespace is ignored. The trimmed text must be non-empty and
/// between [`MIN_TEXT_LEN`] and [`MAX_TEXT_LEN`] characters inclusive.
pub fn validate_text(text: &str) -> Result<(), CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("text is required".to_string()));
    }

    let len = trimmed.chars().count();
    if len < MIN_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "text must be at least {MIN_TEXT_LEN} characters"
        )));
    }
    if len > MAX_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "text cannot exceed {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate the authoring user of an answer. The nil UUID is rejected.
pub fn validate_user_id(user_id: &Uuid) -> Result<(), CoreError> {
    if user_id.is_nil() {
        return Err(CoreError::Validation("user id required".to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
