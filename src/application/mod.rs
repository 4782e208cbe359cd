//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (scoring a submission)
//! from query handlers (reading the questionnaire).

pub mod bootstrap;
pub mod handlers;

pub use bootstrap::{load_instrument, BootstrapError};
pub use handlers::{
    GetQuestionnaireHandler, GetQuestionnaireQuery, QuestionnaireView, ScoreSubmissionCommand,
    ScoreSubmissionError, ScoreSubmissionHandler, ScoreSubmissionResult,
};
