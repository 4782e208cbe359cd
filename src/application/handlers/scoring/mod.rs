//! Scoring command and query handlers.

// Command handlers
mod score_submission;

// Query handlers
mod get_questionnaire;

pub use get_questionnaire::{GetQuestionnaireHandler, GetQuestionnaireQuery, QuestionnaireView};
pub use score_submission::{
    ScoreSubmissionCommand, ScoreSubmissionError, ScoreSubmissionHandler, ScoreSubmissionResult,
};
