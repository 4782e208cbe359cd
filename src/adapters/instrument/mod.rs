//! Instrument source adapters.
//!
//! - `FsInstrumentSource` - JSON/YAML documents in a directory
//! - `EmbeddedInstrumentSource` - Default instrument compiled into the binary

mod embedded;
mod filesystem;
mod format;

pub use embedded::EmbeddedInstrumentSource;
pub use filesystem::FsInstrumentSource;
pub use format::DocumentFormat;

use crate::config::{InstrumentConfig, InstrumentSourceKind, ValidationError};
use crate::ports::InstrumentSource;

/// Builds the source selected by configuration.
pub fn source_from_config(
    config: &InstrumentConfig,
) -> Result<Box<dyn InstrumentSource>, ValidationError> {
    match config.source {
        InstrumentSourceKind::Embedded => Ok(Box::new(EmbeddedInstrumentSource::new())),
        InstrumentSourceKind::Directory => {
            let dir = config
                .data_dir
                .as_ref()
                .ok_or(ValidationError::MissingRequired("instrument.data_dir"))?;
            Ok(Box::new(FsInstrumentSource::new(dir).with_file_names(
                &config.questionnaire_file,
                &config.scoring_key_file,
                &config.calibration_file,
                &config.role_names_file,
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config_selects_embedded_source() {
        let source = source_from_config(&InstrumentConfig::default()).unwrap();
        assert_eq!(source.describe(), "embedded default instrument");
    }

    #[test]
    fn directory_config_selects_filesystem_source() {
        let config = InstrumentConfig {
            source: InstrumentSourceKind::Directory,
            data_dir: Some(PathBuf::from("/srv/instrument")),
            ..Default::default()
        };
        let source = source_from_config(&config).unwrap();
        assert_eq!(source.describe(), "directory /srv/instrument");
    }

    #[test]
    fn directory_config_without_dir_is_rejected() {
        let config = InstrumentConfig {
            source: InstrumentSourceKind::Directory,
            ..Default::default()
        };
        assert!(source_from_config(&config).is_err());
    }
}
