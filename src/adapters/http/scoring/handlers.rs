//! HTTP handlers for the scoring endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::application::{
    GetQuestionnaireHandler, GetQuestionnaireQuery, ScoreSubmissionCommand,
    ScoreSubmissionError, ScoreSubmissionHandler,
};
use crate::domain::foundation::ErrorCode;
use crate::domain::instrument::Instrument;

use super::dto::{
    ErrorResponse, HealthResponse, QuestionnaireResponse, ResultsResponse, ScoreRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Shared state: the instrument, validated once at startup.
#[derive(Clone)]
pub struct ScoringAppState {
    pub instrument: Arc<Instrument>,
}

impl ScoringAppState {
    pub fn new(instrument: Arc<Instrument>) -> Self {
        Self { instrument }
    }

    /// Create handlers on demand from the shared state.
    pub fn score_submission_handler(&self) -> ScoreSubmissionHandler {
        ScoreSubmissionHandler::new(self.instrument.clone())
    }

    pub fn get_questionnaire_handler(&self) -> GetQuestionnaireHandler {
        GetQuestionnaireHandler::new(self.instrument.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

/// GET /api/questionnaire - Questions, choices, and the per-choice maximum
pub async fn get_questionnaire(State(state): State<ScoringAppState>) -> impl IntoResponse {
    let view = state.get_questionnaire_handler().handle(GetQuestionnaireQuery);
    Json(QuestionnaireResponse::from(view))
}

/// POST /api/results - Score one session's allocations
pub async fn score_results(
    State(state): State<ScoringAppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ScoringApiError> {
    let Json(req) = payload.map_err(|e| ScoringApiError::BadRequest(e.body_text()))?;

    let mut allocations = Vec::with_capacity(req.allocations.len());
    let mut malformed = Vec::new();
    for (position, allocation) in req.allocations.iter().enumerate() {
        match allocation.to_entry(position) {
            Ok(entry) => allocations.push(entry),
            Err(message) => malformed.push(message),
        }
    }
    if !malformed.is_empty() {
        return Err(ScoringApiError::InvalidAllocations(malformed));
    }

    let summary = state
        .score_submission_handler()
        .handle(ScoreSubmissionCommand { allocations })?;

    Ok(Json(ResultsResponse::from(summary)))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// API error type for the scoring endpoints.
#[derive(Debug)]
pub enum ScoringApiError {
    /// Body is not JSON of the expected shape.
    BadRequest(String),
    /// Entries that do not fit the questionnaire, one message each.
    InvalidAllocations(Vec<String>),
    /// The instrument failed to score a valid submission.
    Scoring(String),
}

impl From<ScoreSubmissionError> for ScoringApiError {
    fn from(err: ScoreSubmissionError) -> Self {
        match err {
            ScoreSubmissionError::InvalidAllocations(errors) => ScoringApiError::InvalidAllocations(
                errors.iter().map(ToString::to_string).collect(),
            ),
            ScoreSubmissionError::Scoring(e) => ScoringApiError::Scoring(e.to_string()),
        }
    }
}

impl IntoResponse for ScoringApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ScoringApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ScoringApiError::InvalidAllocations(messages) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(
                    ErrorCode::InvalidAllocation,
                    format!("{} allocation(s) rejected", messages.len()),
                )
                .with_details(json!(messages)),
            ),
            ScoringApiError::Scoring(msg) => {
                tracing::error!("Scoring error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(ErrorCode::ScoringFailed, msg),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Role;
    use crate::domain::scoring::ScoringError;

    #[test]
    fn invalid_allocations_map_to_400() {
        let response = ScoringApiError::InvalidAllocations(vec!["Q9 is not part of the questionnaire".to_string()])
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn scoring_failure_maps_to_500() {
        let err: ScoringApiError =
            ScoreSubmissionError::Scoring(ScoringError::MissingCalibration { role: Role::Plant })
                .into();
        assert!(matches!(err, ScoringApiError::Scoring(ref msg) if msg.contains("plant")));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
