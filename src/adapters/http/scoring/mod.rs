//! HTTP adapter for scoring endpoints.
//!
//! Exposes the scoring engine via REST API:
//! - `GET /health` - Liveness check
//! - `GET /api/questionnaire` - Questionnaire definition for the form
//! - `POST /api/results` - Score one session's allocations
//!
//! The server holds no session state: the form keeps its allocations and
//! resubmits them in full on every change.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{ScoringApiError, ScoringAppState};
pub use routes::scoring_router;
