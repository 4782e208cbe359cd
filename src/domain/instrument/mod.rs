//! Instrument Module - the questionnaire definition and its scoring tables.
//!
//! # Components
//!
//! - `Questionnaire` - Questions numbered 1..N, choices lettered A, B, C...
//! - `ScoringKey` - Per role, the designated choice of each question
//! - `CalibrationTables` - Per role, raw score to calibrated score rows
//! - `RoleNames` - Per role, the human-readable display name
//! - `Instrument` - The validated bundle of all four
//!
//! Documents are validated eagerly: every structural violation is collected
//! into a single `InstrumentError` so a broken instrument fails at startup
//! with the complete list of problems.

mod calibration;
mod documents;
mod instrument;
mod ordered;
mod questionnaire;
mod roles;
mod scoring_key;
mod violation;

pub use calibration::{CalibrationRow, CalibrationTable, CalibrationTables};
pub use documents::{
    CalibrationDocument, InstrumentDocuments, QuestionnaireDocument, RoleNamesDocument,
    ScoringKeyDocument,
};
pub use instrument::Instrument;
pub use ordered::OrderedEntries;
pub use questionnaire::{Choice, Question, Questionnaire, PROMPT_KEY};
pub use roles::RoleNames;
pub use scoring_key::{Designation, RoleKey, ScoringKey};
pub use violation::{Document, InstrumentError, Violation};
