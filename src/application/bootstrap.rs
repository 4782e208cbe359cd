//! Startup loading of the instrument.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::domain::instrument::{Instrument, InstrumentError};
use crate::ports::{InstrumentSource, InstrumentSourceError};

/// Reasons the instrument could not be made available.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Source(#[from] InstrumentSourceError),

    #[error(transparent)]
    Invalid(#[from] InstrumentError),
}

/// Reads and validates the instrument once, for sharing across requests.
///
/// Every violation is logged individually before the combined error is
/// returned, so a broken instrument is diagnosable from the startup log.
pub fn load_instrument(source: &dyn InstrumentSource) -> Result<Arc<Instrument>, BootstrapError> {
    let origin = source.describe();
    let documents = source.load().map_err(|e| {
        error!(source = %origin, error = %e, "Failed to read instrument");
        e
    })?;

    let instrument = Instrument::from_documents(&documents).map_err(|e| {
        for violation in &e.violations {
            error!(source = %origin, %violation, "Instrument violation");
        }
        e
    })?;

    info!(
        source = %origin,
        questions = instrument.questionnaire().len(),
        roles = instrument.scoring_key().role_keys().len(),
        "Instrument loaded"
    );
    Ok(Arc::new(instrument))
}
