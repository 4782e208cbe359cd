//! GetQuestionnaireHandler - Query handler for the questionnaire definition.

use std::sync::Arc;

use crate::domain::foundation::Points;
use crate::domain::instrument::{Instrument, Question};

/// Query for the questionnaire a respondent fills in.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetQuestionnaireQuery;

/// What a form needs to render the questionnaire.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireView {
    pub questions: Vec<Question>,
    /// Upper bound for a single choice's allocation.
    pub max_points_per_choice: u8,
}

/// Handler returning the loaded questionnaire.
pub struct GetQuestionnaireHandler {
    instrument: Arc<Instrument>,
}

impl GetQuestionnaireHandler {
    pub fn new(instrument: Arc<Instrument>) -> Self {
        Self { instrument }
    }

    pub fn handle(&self, _query: GetQuestionnaireQuery) -> QuestionnaireView {
        QuestionnaireView {
            questions: self.instrument.questionnaire().questions().to_vec(),
            max_points_per_choice: Points::MAX.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instrument::InstrumentDocuments;

    #[test]
    fn returns_questions_in_order() {
        let documents = InstrumentDocuments {
            questionnaire: serde_json::from_str(
                r#"{
                    "Q1": {"prompt": "first", "A": "a"},
                    "Q2": {"A": "a", "B": "b", "prompt": "second"}
                }"#,
            )
            .unwrap(),
            scoring_key: serde_json::from_str(r#"{"shaper": {"1": "A", "2": "B"}}"#).unwrap(),
            calibration: serde_json::from_str(r#"{"shaper": [[10, 90]]}"#).unwrap(),
            role_names: serde_json::from_str(r#"{"shaper": "Shaper"}"#).unwrap(),
        };
        let instrument = Arc::new(Instrument::from_documents(&documents).unwrap());

        let view = GetQuestionnaireHandler::new(instrument).handle(GetQuestionnaireQuery);
        assert_eq!(view.max_points_per_choice, 10);
        let prompts: Vec<&str> = view.questions.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["first", "second"]);
        assert_eq!(view.questions[1].choice_count(), 2);
    }
}
