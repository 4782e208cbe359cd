//! Document formats accepted for instrument files.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::instrument::Document;
use crate::ports::InstrumentSourceError;

/// Serialization format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.json` is JSON; `.yaml` and `.yml` are YAML. Case-insensitive.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, String> {
        match self {
            Self::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

/// Parses one document's text in the format implied by `path`.
pub(crate) fn parse_document<T: DeserializeOwned>(
    document: Document,
    path: &Path,
    text: &str,
) -> Result<T, InstrumentSourceError> {
    let format =
        DocumentFormat::from_path(path).ok_or_else(|| InstrumentSourceError::UnsupportedFormat {
            document,
            path: path.display().to_string(),
        })?;

    format
        .parse(text)
        .map_err(|message| InstrumentSourceError::Parse {
            document,
            path: path.display().to_string(),
            message,
        })
}
