//! ScoreSubmissionHandler - Command handler scoring one allocation submission.
//!
//! The submission is applied to a blank allocation set shaped after the
//! instrument's questionnaire, then run through the full scoring pipeline.
//! Nothing is retained between calls.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::domain::instrument::Instrument;
use crate::domain::scoring::{
    AllocationEntry, AllocationError, AllocationSet, ResultsSummary, RoleBand, ScoringError,
    ScoringPipeline,
};

/// Command carrying one session's complete set of allocations.
#[derive(Debug, Clone, Default)]
pub struct ScoreSubmissionCommand {
    /// Entries for every non-zero choice; unlisted choices count as zero.
    pub allocations: Vec<AllocationEntry>,
}

/// Result of a successful submission.
pub type ScoreSubmissionResult = ResultsSummary;

/// Error type for scoring a submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreSubmissionError {
    /// One or more entries do not fit the questionnaire.
    #[error("submission has {} invalid allocation(s)", .0.len())]
    InvalidAllocations(Vec<AllocationError>),

    /// The instrument could not score a well-formed submission.
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Handler for scoring submissions against a shared instrument.
pub struct ScoreSubmissionHandler {
    instrument: Arc<Instrument>,
}

impl ScoreSubmissionHandler {
    pub fn new(instrument: Arc<Instrument>) -> Self {
        Self { instrument }
    }

    pub fn handle(
        &self,
        cmd: ScoreSubmissionCommand,
    ) -> Result<ScoreSubmissionResult, ScoreSubmissionError> {
        let entries = cmd.allocations.len();
        let allocations = AllocationSet::from_entries(self.instrument.questionnaire(), cmd.allocations)
            .map_err(|errors| {
                warn!(entries, invalid = errors.len(), "Rejected allocation submission");
                ScoreSubmissionError::InvalidAllocations(errors)
            })?;

        let summary = ScoringPipeline::run(&self.instrument, &allocations).map_err(|e| {
            error!(error = %e, "Scoring failed for a well-formed submission");
            e
        })?;

        debug!(
            entries,
            natural = summary.roles_in(RoleBand::Natural).count(),
            avoided = summary.roles_in(RoleBand::Avoided).count(),
            "Scored submission"
        );

        Ok(summary)
    }
}
