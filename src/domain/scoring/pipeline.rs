//! Scoring Pipeline - one full, pure recomputation for a session.

use crate::domain::instrument::Instrument;

use super::allocation::AllocationSet;
use super::calibration_interpolator::CalibrationInterpolator;
use super::classifier::{Classifier, ResultsSummary, RoleResult};
use super::errors::ScoringError;
use super::normalizer::Normalizer;
use super::role_aggregator::RoleAggregator;

/// Runs normalizer, aggregator, interpolator, and classifier in sequence.
///
/// The instrument is only read and the allocation set only borrowed, so
/// any number of sessions may run concurrently against one shared
/// instrument. Identical inputs always produce identical summaries.
pub struct ScoringPipeline;

impl ScoringPipeline {
    pub fn run(
        instrument: &Instrument,
        allocations: &AllocationSet,
    ) -> Result<ResultsSummary, ScoringError> {
        let normalized = Normalizer::normalize(allocations);
        let raw_scores = RoleAggregator::aggregate(
            instrument.questionnaire(),
            instrument.scoring_key(),
            &normalized,
        )?;

        let mut results = Vec::with_capacity(raw_scores.len());
        for (role, raw_score) in raw_scores.iter() {
            let calibrated_score =
                CalibrationInterpolator::calibrate(instrument.calibration(), role, raw_score)?;
            let display_name = instrument
                .role_names()
                .get(role)
                .ok_or(ScoringError::MissingDisplayName { role })?;

            results.push(RoleResult {
                role,
                display_name: display_name.to_string(),
                raw_score,
                calibrated_score,
                band: Classifier::classify(calibrated_score),
            });
        }

        Ok(Classifier::summarize(results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ChoiceId, Points, QuestionId, Role};
    use crate::domain::instrument::InstrumentDocuments;
    use crate::domain::scoring::RoleBand;

    fn instrument() -> Instrument {
        let documents = InstrumentDocuments {
            questionnaire: serde_json::from_str(
                r#"{
                    "Q1": {"prompt": "p1", "A": "a", "B": "b"},
                    "Q2": {"prompt": "p2", "A": "a", "B": "b"}
                }"#,
            )
            .unwrap(),
            scoring_key: serde_json::from_str(
                r#"{"shaper": {"1": "B", "2": "A"}, "plant": {"1": "A", "2": "B"}}"#,
            )
            .unwrap(),
            calibration: serde_json::from_str(
                r#"{"plant": [[20, 80], [10, 40]], "shaper": [[20, 90], [5, 20]]}"#,
            )
            .unwrap(),
            role_names: serde_json::from_str(r#"{"plant": "Plant", "shaper": "Shaper"}"#)
                .unwrap(),
        };
        Instrument::from_documents(&documents).unwrap()
    }

    fn allocate(set: &mut AllocationSet, question: u16, letter: char, points: i64) {
        set.set(
            QuestionId::new(question).unwrap(),
            ChoiceId::from_letter(letter).unwrap(),
            Points::try_new(points).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn scores_in_scoring_key_order() {
        let instrument = instrument();
        let mut set = AllocationSet::blank(instrument.questionnaire());
        allocate(&mut set, 1, 'A', 10);
        allocate(&mut set, 2, 'A', 4);
        allocate(&mut set, 2, 'B', 6);

        let summary = ScoringPipeline::run(&instrument, &set).unwrap();

        assert_eq!(summary.results.len(), 2);
        let shaper = &summary.results[0];
        assert_eq!(shaper.role, Role::Shaper);
        assert_eq!(shaper.raw_score, 4.0);
        assert_eq!(shaper.calibrated_score, 20);
        assert_eq!(shaper.band, RoleBand::Avoided);

        let plant = &summary.results[1];
        assert_eq!(plant.display_name, "Plant");
        assert_eq!(plant.raw_score, 16.0);
        assert_eq!(plant.calibrated_score, 64);
        assert_eq!(plant.band, RoleBand::Secondary);
    }

    #[test]
    fn blank_session_scores_at_table_minimum() {
        let instrument = instrument();
        let set = AllocationSet::blank(instrument.questionnaire());

        let summary = ScoringPipeline::run(&instrument, &set).unwrap();
        assert_eq!(summary.result(Role::Plant).unwrap().calibrated_score, 40);
        assert_eq!(summary.result(Role::Shaper).unwrap().calibrated_score, 20);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let instrument = instrument();
        let mut set = AllocationSet::blank(instrument.questionnaire());
        allocate(&mut set, 1, 'B', 3);
        allocate(&mut set, 2, 'A', 7);

        let first = ScoringPipeline::run(&instrument, &set).unwrap();
        let second = ScoringPipeline::run(&instrument, &set).unwrap();
        assert_eq!(first, second);
    }
}
