//! Scoring and allocation errors.

use thiserror::Error;

use crate::domain::foundation::{ChoiceId, QuestionId, Role, ValidationError};

/// A problem with one submitted allocation entry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    #[error("{question} is not part of the questionnaire")]
    UnknownQuestion { question: QuestionId },

    #[error("{question} does not offer choice {choice}")]
    UnknownChoice { question: QuestionId, choice: ChoiceId },

    #[error("{question}{choice}: {source}")]
    InvalidPoints {
        question: QuestionId,
        choice: ChoiceId,
        #[source]
        source: ValidationError,
    },

    #[error("{question}{choice} is allocated more than once")]
    DuplicateEntry { question: QuestionId, choice: ChoiceId },
}

/// A computation failure. None of these occur with a validated instrument
/// and an allocation set built from its questionnaire; they are checked so
/// a malformed table never produces a silently wrong score.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("scoring key for '{role}' designates {question}{choice}, which the questionnaire does not offer")]
    UnknownDesignation {
        role: Role,
        question: QuestionId,
        choice: ChoiceId,
    },

    #[error("allocation set has no value for {question}{choice}, designated for '{role}'")]
    MissingAllocation {
        role: Role,
        question: QuestionId,
        choice: ChoiceId,
    },

    #[error("no calibration table for role '{role}'")]
    MissingCalibration { role: Role },

    #[error("calibration table for role '{role}' has no rows")]
    EmptyCalibration { role: Role },

    #[error("raw score {raw} for role '{role}' is not finite")]
    NonFiniteScore { role: Role, raw: f64 },

    #[error("calibration table for role '{role}' has {matches} rows for raw score {raw}")]
    AmbiguousCalibration { role: Role, raw: f64, matches: usize },

    #[error("calibration table for role '{role}' has no interval bracketing raw score {raw}")]
    CalibrationGap { role: Role, raw: f64 },

    #[error("no display name for role '{role}'")]
    MissingDisplayName { role: Role },
}
