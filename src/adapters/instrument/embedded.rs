//! Embedded default instrument.
//!
//! A ten-question inventory over the nine team roles, compiled into the
//! binary so the server runs without any data files.

use std::path::Path;

use once_cell::sync::Lazy;

use crate::domain::instrument::{Document, InstrumentDocuments};
use crate::ports::{InstrumentSource, InstrumentSourceError};

use super::format::parse_document;

const QUESTIONNAIRE: &str = include_str!("../../../data/questionnaire.json");
const SCORING_KEY: &str = include_str!("../../../data/scoring_key.json");
const CALIBRATION: &str = include_str!("../../../data/calibration.json");
const ROLE_NAMES: &str = include_str!("../../../data/role_names.json");

/// Parsed once per process; every `load` hands out a clone.
static DOCUMENTS: Lazy<Result<InstrumentDocuments, InstrumentSourceError>> = Lazy::new(|| {
    Ok(InstrumentDocuments {
        questionnaire: parse_document(
            Document::Questionnaire,
            Path::new("questionnaire.json"),
            QUESTIONNAIRE,
        )?,
        scoring_key: parse_document(Document::ScoringKey, Path::new("scoring_key.json"), SCORING_KEY)?,
        calibration: parse_document(Document::Calibration, Path::new("calibration.json"), CALIBRATION)?,
        role_names: parse_document(Document::RoleNames, Path::new("role_names.json"), ROLE_NAMES)?,
    })
});

/// Source for the instrument shipped inside the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedInstrumentSource;

impl EmbeddedInstrumentSource {
    pub fn new() -> Self {
        Self
    }
}

impl InstrumentSource for EmbeddedInstrumentSource {
    fn load(&self) -> Result<InstrumentDocuments, InstrumentSourceError> {
        DOCUMENTS.clone()
    }

    fn describe(&self) -> String {
        "embedded default instrument".to_string()
    }
}
