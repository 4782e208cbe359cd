//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API over the scoring engine
//! - `instrument` - Instrument document sources (filesystem, embedded)

pub mod http;
pub mod instrument;

pub use http::{scoring_router, ScoringAppState};
pub use instrument::{source_from_config, EmbeddedInstrumentSource, FsInstrumentSource};
