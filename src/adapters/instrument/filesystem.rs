//! Filesystem adapter reading instrument documents from a directory

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::instrument::{Document, InstrumentDocuments};
use crate::ports::{InstrumentSource, InstrumentSourceError};

use super::format::parse_document;

/// Reads the four instrument documents from one directory.
///
/// Each file may be JSON or YAML independently, chosen by its extension.
pub struct FsInstrumentSource {
    dir: PathBuf,
    questionnaire_file: String,
    scoring_key_file: String,
    calibration_file: String,
    role_names_file: String,
}

impl FsInstrumentSource {
    /// Create a source using the default `<document>.json` file names
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            questionnaire_file: "questionnaire.json".to_string(),
            scoring_key_file: "scoring_key.json".to_string(),
            calibration_file: "calibration.json".to_string(),
            role_names_file: "role_names.json".to_string(),
        }
    }

    /// Override the file names, relative to the directory
    pub fn with_file_names(
        mut self,
        questionnaire: impl Into<String>,
        scoring_key: impl Into<String>,
        calibration: impl Into<String>,
        role_names: impl Into<String>,
    ) -> Self {
        self.questionnaire_file = questionnaire.into();
        self.scoring_key_file = scoring_key.into();
        self.calibration_file = calibration.into();
        self.role_names_file = role_names.into();
        self
    }

    fn read<T: DeserializeOwned>(
        &self,
        document: Document,
        file_name: &str,
    ) -> Result<T, InstrumentSourceError> {
        let path = self.dir.join(file_name);
        debug!(%document, path = %path.display(), "Reading instrument document");

        let text = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                InstrumentSourceError::NotFound {
                    document,
                    path: path.display().to_string(),
                }
            } else {
                InstrumentSourceError::Io {
                    document,
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        parse_document(document, &path, &text)
    }
}

impl InstrumentSource for FsInstrumentSource {
    fn load(&self) -> Result<InstrumentDocuments, InstrumentSourceError> {
        Ok(InstrumentDocuments {
            questionnaire: self.read(Document::Questionnaire, &self.questionnaire_file)?,
            scoring_key: self.read(Document::ScoringKey, &self.scoring_key_file)?,
            calibration: self.read(Document::Calibration, &self.calibration_file)?,
            role_names: self.read(Document::RoleNames, &self.role_names_file)?,
        })
    }

    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }
}
