//! Scoring Module - turns one session's allocations into classified results.
//!
//! # Stages
//!
//! - `Normalizer` - Rescales each question's points to sum to 10
//! - `RoleAggregator` - Sums normalized points along each role's key
//! - `CalibrationInterpolator` - Maps raw scores through calibration tables
//! - `Classifier` - Bands calibrated scores and emits highlights
//!
//! `ScoringPipeline` chains all four. Every stage is a pure function of its
//! inputs; nothing here holds state between calls.

mod allocation;
mod calibration_interpolator;
mod classifier;
mod errors;
mod normalizer;
mod pipeline;
mod role_aggregator;

pub use allocation::{AllocationEntry, AllocationSet, NormalizedAllocations};
pub use calibration_interpolator::CalibrationInterpolator;
pub use classifier::{
    Classifier, Emphasis, Highlight, ResultsSummary, RoleBand, RoleResult, NATURAL_THRESHOLD,
    SECONDARY_THRESHOLD,
};
pub use errors::{AllocationError, ScoringError};
pub use normalizer::{Normalizer, NORMALIZED_TOTAL};
pub use pipeline::ScoringPipeline;
pub use role_aggregator::{RawScores, RoleAggregator};
