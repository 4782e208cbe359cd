//! HTTP adapters - REST API implementations.

pub mod scoring;

pub use scoring::{scoring_router, ScoringAppState};
