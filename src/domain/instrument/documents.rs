//! Raw instrument documents as authored, before validation.

use super::ordered::OrderedEntries;

/// `"Q1" -> { "prompt": text, "A": text, ... }`
pub type QuestionnaireDocument = OrderedEntries<OrderedEntries<String>>;

/// `role_tag -> { "1": "C", ... }`
pub type ScoringKeyDocument = OrderedEntries<OrderedEntries<String>>;

/// `role_tag -> [[raw, calibrated], ...]`
pub type CalibrationDocument = OrderedEntries<Vec<(f64, f64)>>;

/// `role_tag -> display name`
pub type RoleNamesDocument = OrderedEntries<String>;

/// The four documents an instrument is assembled from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstrumentDocuments {
    pub questionnaire: QuestionnaireDocument,
    pub scoring_key: ScoringKeyDocument,
    pub calibration: CalibrationDocument,
    pub role_names: RoleNamesDocument,
}
