//! Route configuration for scoring endpoints.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{get_questionnaire, health, score_results, ScoringAppState};

/// Creates the scoring router with all endpoints.
///
/// Routes:
/// - `GET /health` - Liveness check
/// - `GET /api/questionnaire` - Questionnaire definition
/// - `POST /api/results` - Score a submission
pub fn scoring_router(state: ScoringAppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/questionnaire", get(get_questionnaire))
        .route("/api/results", post(score_results))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
