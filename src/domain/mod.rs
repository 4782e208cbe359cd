//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, points, errors)
//! - `instrument` - Questionnaire, scoring key, calibration tables, role names
//! - `scoring` - Normalization, aggregation, calibration, and classification

pub mod foundation;
pub mod instrument;
pub mod scoring;
