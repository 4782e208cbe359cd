//! InstrumentSource port for loading instrument documents

use thiserror::Error;

use crate::domain::instrument::{Document, InstrumentDocuments};

/// Errors that can occur while reading instrument documents
///
/// These cover reading and parsing only. Structural problems in a parsed
/// document surface later as `InstrumentError` violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstrumentSourceError {
    /// Document file does not exist
    #[error("{document} not found at {path}")]
    NotFound { document: Document, path: String },

    /// Document could not be read
    #[error("failed to read {document} from {path}: {message}")]
    Io {
        document: Document,
        path: String,
        message: String,
    },

    /// Document is not valid JSON or YAML of the expected shape
    #[error("failed to parse {document} from {path}: {message}")]
    Parse {
        document: Document,
        path: String,
        message: String,
    },

    /// File extension is neither JSON nor YAML
    #[error("unsupported format for {document} at {path}")]
    UnsupportedFormat { document: Document, path: String },
}

/// Source of the four instrument documents
///
/// Called once at startup; the validated `Instrument` built from the
/// result is shared read-only afterwards.
pub trait InstrumentSource: Send + Sync {
    /// Read and parse every document
    fn load(&self) -> Result<InstrumentDocuments, InstrumentSourceError>;

    /// Human-readable origin, for logs
    fn describe(&self) -> String;
}
