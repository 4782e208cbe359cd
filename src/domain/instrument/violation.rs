//! Load-time structural violations of the instrument documents.

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{QuestionId, Role};

/// The four documents an instrument is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Questionnaire,
    ScoringKey,
    Calibration,
    RoleNames,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Document::Questionnaire => "questionnaire",
            Document::ScoringKey => "scoring key",
            Document::Calibration => "calibration table",
            Document::RoleNames => "role names",
        };
        write!(f, "{}", s)
    }
}

/// A single structural defect found while validating instrument documents.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("questionnaire is empty")]
    EmptyQuestionnaire,

    #[error("questionnaire has {count} questions, at most {max} are supported")]
    TooManyQuestions { count: usize, max: usize },

    #[error("question key '{key}' at position {position} should be 'Q{position}'")]
    QuestionNumbering { position: usize, key: String },

    #[error("{question} has no prompt")]
    MissingPrompt { question: String },

    #[error("{question} has an empty prompt")]
    EmptyPrompt { question: String },

    #[error("{question} lists '{key}' more than once")]
    DuplicateField { question: String, key: String },

    #[error("{question} has no choices")]
    NoChoices { question: String },

    #[error("{question} has {count} choices, at most {max} are supported")]
    TooManyChoices {
        question: String,
        count: usize,
        max: usize,
    },

    #[error("{question} choice key '{key}' at position {position} should be '{expected}'")]
    ChoiceSequence {
        question: String,
        position: usize,
        key: String,
        expected: char,
    },

    #[error("{document} lists unrecognized role '{tag}'")]
    UnknownRole { document: Document, tag: String },

    #[error("{document} lists role '{role}' more than once")]
    DuplicateRole { document: Document, role: Role },

    #[error("role '{role}' is missing from the {document}")]
    RoleMissing { role: Role, document: Document },

    #[error("scoring key for '{role}': '{key}' is not a question number")]
    InvalidKeyQuestion { role: Role, key: String },

    #[error("scoring key for '{role}' lists {question} more than once")]
    DuplicateKeyQuestion { role: Role, question: QuestionId },

    #[error("scoring key for '{role}' references {question}, which is not in the questionnaire")]
    UnknownQuestion { role: Role, question: QuestionId },

    #[error("scoring key for '{role}' designates no choice for {question}")]
    MissingKeyQuestion { role: Role, question: QuestionId },

    #[error("scoring key for '{role}' at {question}: '{value}' is not a choice letter")]
    InvalidKeyChoice {
        role: Role,
        question: QuestionId,
        value: String,
    },

    #[error("scoring key for '{role}' designates {question}{choice}, which the question does not offer")]
    UnknownChoice {
        role: Role,
        question: QuestionId,
        choice: char,
    },

    #[error("calibration table for '{role}' is empty")]
    EmptyCalibration { role: Role },

    #[error("calibration table for '{role}' row {row}: raw score {raw} is not finite")]
    NonFiniteRaw { role: Role, row: usize, raw: f64 },

    #[error("calibration table for '{role}' row {row}: calibrated score {value} must be a non-negative integer")]
    InvalidCalibrated { role: Role, row: usize, value: f64 },

    #[error("calibration table for '{role}' row {row}: raw score {raw} does not descend from {previous}")]
    NotDescending {
        role: Role,
        row: usize,
        raw: f64,
        previous: f64,
    },

    #[error("display name for '{role}' is empty")]
    EmptyDisplayName { role: Role },
}

/// Every violation found while assembling an instrument.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("instrument failed validation with {} violation(s): {}", .violations.len(), join(.violations))]
pub struct InstrumentError {
    pub violations: Vec<Violation>,
}

impl InstrumentError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
