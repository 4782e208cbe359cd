//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `InstrumentSource` - Where questionnaire, scoring key, calibration
//!   tables, and role names are read from

mod instrument_source;

pub use instrument_source::{InstrumentSource, InstrumentSourceError};
