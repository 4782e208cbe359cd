//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod scoring;

pub use scoring::{
    GetQuestionnaireHandler, GetQuestionnaireQuery, QuestionnaireView, ScoreSubmissionCommand,
    ScoreSubmissionError, ScoreSubmissionHandler, ScoreSubmissionResult,
};
