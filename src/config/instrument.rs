//! Instrument source configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where the questionnaire and its scoring tables are loaded from
#[derive(Debug, Clone, Deserialize)]
pub struct InstrumentConfig {
    /// Which source to read
    #[serde(default)]
    pub source: InstrumentSourceKind,

    /// Directory holding the four documents; required for `directory`
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_questionnaire_file")]
    pub questionnaire_file: String,

    #[serde(default = "default_scoring_key_file")]
    pub scoring_key_file: String,

    #[serde(default = "default_calibration_file")]
    pub calibration_file: String,

    #[serde(default = "default_role_names_file")]
    pub role_names_file: String,
}

/// Instrument source selector
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentSourceKind {
    /// The default instrument compiled into the binary
    #[default]
    Embedded,
    /// JSON or YAML documents read from `data_dir`
    Directory,
}

impl InstrumentConfig {
    /// File names in questionnaire, scoring key, calibration, role names order
    pub fn file_names(&self) -> [&str; 4] {
        [
            &self.questionnaire_file,
            &self.scoring_key_file,
            &self.calibration_file,
            &self.role_names_file,
        ]
    }

    /// Validate instrument configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.source == InstrumentSourceKind::Directory && self.data_dir.is_none() {
            return Err(ValidationError::MissingRequired("instrument.data_dir"));
        }
        for name in self.file_names() {
            if !has_document_extension(name) {
                return Err(ValidationError::UnsupportedDocumentFile(name.to_string()));
            }
        }
        Ok(())
    }
}

impl Default for InstrumentConfig {
    fn default() -> Self {
        Self {
            source: InstrumentSourceKind::default(),
            data_dir: None,
            questionnaire_file: default_questionnaire_file(),
            scoring_key_file: default_scoring_key_file(),
            calibration_file: default_calibration_file(),
            role_names_file: default_role_names_file(),
        }
    }
}

fn has_document_extension(name: &str) -> bool {
    matches!(
        Path::new(name).extension().and_then(|ext| ext.to_str()),
        Some("json" | "yaml" | "yml")
    )
}

fn default_questionnaire_file() -> String {
    "questionnaire.json".to_string()
}

fn default_scoring_key_file() -> String {
    "scoring_key.json".to_string()
}

fn default_calibration_file() -> String {
    "calibration.json".to_string()
}

fn default_role_names_file() -> String {
    "role_names.json".to_string()
}
