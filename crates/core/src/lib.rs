//! Shared domain primitives for the questions & answers service.
//!
//! Holds the ID/timestamp aliases, the domain error type, and the
//! field-level validation rules used by the create DTOs in `qna_db`.

pub mod error;
pub mod types;
pub mod validation;
