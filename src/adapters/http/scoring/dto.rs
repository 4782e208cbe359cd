//! Data transfer objects for the scoring endpoints.

use serde::{Deserialize, Serialize};

use crate::application::QuestionnaireView;
use crate::domain::foundation::{ChoiceId, ErrorCode, QuestionId, Role, ValidationError};
use crate::domain::instrument::{Choice, Question};
use crate::domain::scoring::{
    AllocationEntry, Emphasis, Highlight, ResultsSummary, RoleBand, RoleResult,
};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// One allocation as the form submits it.
///
/// Fields stay loosely typed so every bad entry can be reported in one
/// response instead of failing on the first.
#[derive(Debug, Clone, Deserialize)]
pub struct AllocationRequest {
    pub question: u16,
    pub choice: String,
    pub points: i64,
}

impl AllocationRequest {
    /// Converts to a domain entry; `position` labels the error.
    pub fn to_entry(&self, position: usize) -> Result<AllocationEntry, String> {
        let question = QuestionId::new(self.question).map_err(|e| entry_error(position, e))?;
        let choice = self
            .choice
            .parse::<ChoiceId>()
            .map_err(|e| entry_error(position, e))?;
        Ok(AllocationEntry::new(question, choice, self.points))
    }
}

fn entry_error(position: usize, error: ValidationError) -> String {
    format!("allocations[{}]: {}", position, error)
}

/// POST /api/results body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub allocations: Vec<AllocationRequest>,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceResponse {
    pub letter: String,
    pub text: String,
}

impl From<&Choice> for ChoiceResponse {
    fn from(choice: &Choice) -> Self {
        Self {
            letter: choice.id.to_string(),
            text: choice.text.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub number: u16,
    pub prompt: String,
    pub choices: Vec<ChoiceResponse>,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            number: question.id.number(),
            prompt: question.prompt.clone(),
            choices: question.choices.iter().map(ChoiceResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    pub questions: Vec<QuestionResponse>,
    pub max_points_per_choice: u8,
}

impl From<QuestionnaireView> for QuestionnaireResponse {
    fn from(view: QuestionnaireView) -> Self {
        Self {
            questions: view.questions.iter().map(QuestionResponse::from).collect(),
            max_points_per_choice: view.max_points_per_choice,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleResultResponse {
    pub role: Role,
    pub display_name: String,
    pub raw_score: f64,
    pub calibrated_score: u32,
    pub band: RoleBand,
    pub label: String,
}

impl From<RoleResult> for RoleResultResponse {
    fn from(result: RoleResult) -> Self {
        Self {
            role: result.role,
            display_name: result.display_name,
            raw_score: result.raw_score,
            calibrated_score: result.calibrated_score,
            band: result.band,
            label: result.band.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightResponse {
    pub row: usize,
    pub role: Role,
    pub emphasis: Emphasis,
}

impl From<Highlight> for HighlightResponse {
    fn from(highlight: Highlight) -> Self {
        Self {
            row: highlight.row,
            role: highlight.role,
            emphasis: highlight.emphasis,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub results: Vec<RoleResultResponse>,
    pub highlights: Vec<HighlightResponse>,
}

impl From<ResultsSummary> for ResultsResponse {
    fn from(summary: ResultsSummary) -> Self {
        Self {
            results: summary.results.into_iter().map(RoleResultResponse::from).collect(),
            highlights: summary.highlights.into_iter().map(HighlightResponse::from).collect(),
        }
    }
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }
}
