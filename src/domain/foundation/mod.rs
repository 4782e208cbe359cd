//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the role inventory domain.

mod errors;
mod ids;
mod points;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{ChoiceId, QuestionId, Role, MAX_CHOICES, MAX_QUESTIONS};
pub use points::Points;
