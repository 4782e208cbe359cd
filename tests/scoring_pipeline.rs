//! End-to-end scoring through the library API.

use proptest::prelude::*;

use role_inventory::adapters::EmbeddedInstrumentSource;
use role_inventory::application::load_instrument;
use role_inventory::domain::foundation::{ChoiceId, Points, QuestionId, Role};
use role_inventory::domain::instrument::{Instrument, InstrumentDocuments};
use role_inventory::domain::scoring::{
    AllocationSet, Normalizer, RoleAggregator, RoleBand, ScoringPipeline,
};

fn two_question_instrument() -> Instrument {
    let documents = InstrumentDocuments {
        questionnaire: serde_json::from_str(
            r#"{
                "Q1": {"prompt": "First", "A": "a", "B": "b"},
                "Q2": {"prompt": "Second", "A": "a", "B": "b"}
            }"#,
        )
        .unwrap(),
        scoring_key: serde_json::from_str(r#"{"implementer": {"1": "A", "2": "B"}}"#).unwrap(),
        calibration: serde_json::from_str(r#"{"implementer": [[20, 80], [10, 40]]}"#).unwrap(),
        role_names: serde_json::from_str(r#"{"implementer": "Implementer"}"#).unwrap(),
    };
    Instrument::from_documents(&documents).unwrap()
}

fn embedded_instrument() -> std::sync::Arc<Instrument> {
    load_instrument(&EmbeddedInstrumentSource::new()).unwrap()
}

fn set_points(set: &mut AllocationSet, question: usize, choice: usize, points: i64) {
    set.set(
        QuestionId::new(question as u16 + 1).unwrap(),
        ChoiceId::from_index(choice).unwrap(),
        Points::try_new(points).unwrap(),
    )
    .unwrap();
}

#[test]
fn two_question_scenario_is_secondary() {
    let instrument = two_question_instrument();
    let mut set = AllocationSet::blank(instrument.questionnaire());
    set_points(&mut set, 0, 0, 10);
    set_points(&mut set, 1, 0, 4);
    set_points(&mut set, 1, 1, 6);

    let summary = ScoringPipeline::run(&instrument, &set).unwrap();
    let result = summary.result(Role::Implementer).unwrap();

    assert_eq!(result.display_name, "Implementer");
    assert_eq!(result.raw_score, 16.0);
    assert_eq!(result.calibrated_score, 64);
    assert_eq!(result.band, RoleBand::Secondary);
    assert_eq!(result.band.label(), "secondary role");
}

#[test]
fn embedded_instrument_reports_every_role_in_key_order() {
    let instrument = embedded_instrument();
    let set = AllocationSet::blank(instrument.questionnaire());

    let summary = ScoringPipeline::run(&instrument, &set).unwrap();
    let roles: Vec<Role> = summary.results.iter().map(|r| r.role).collect();
    assert_eq!(roles, Role::ALL.to_vec());
    assert!(summary.results.iter().all(|r| r.band == RoleBand::Avoided));
    assert_eq!(summary.highlights.len(), Role::ALL.len());
}

#[test]
fn committing_every_point_to_one_role_makes_it_natural() {
    let instrument = embedded_instrument();
    let mut set = AllocationSet::blank(instrument.questionnaire());
    let designations = instrument.scoring_key().designations(Role::Coordinator).unwrap();
    for designation in designations {
        set.set(designation.question, designation.choice, Points::MAX)
            .unwrap();
    }

    let summary = ScoringPipeline::run(&instrument, &set).unwrap();
    let coordinator = summary.result(Role::Coordinator).unwrap();
    assert_eq!(coordinator.raw_score, 100.0);
    assert_eq!(coordinator.band, RoleBand::Natural);
    assert_eq!(
        summary.roles_in(RoleBand::Natural).collect::<Vec<_>>(),
        vec![Role::Coordinator]
    );
}

fn allocations() -> impl Strategy<Value = Vec<Vec<i64>>> {
    prop::collection::vec(prop::collection::vec(0i64..=10, 9), 10)
}

fn build(instrument: &Instrument, values: &[Vec<i64>]) -> AllocationSet {
    let mut set = AllocationSet::blank(instrument.questionnaire());
    for (question, choices) in values.iter().enumerate() {
        for (choice, points) in choices.iter().enumerate() {
            set_points(&mut set, question, choice, *points);
        }
    }
    set
}

proptest! {
    #[test]
    fn raw_scores_share_ten_points_per_answered_question(values in allocations()) {
        let instrument = embedded_instrument();
        let set = build(&instrument, &values);
        let raw = RoleAggregator::aggregate(
            instrument.questionnaire(),
            instrument.scoring_key(),
            &Normalizer::normalize(&set),
        )
        .unwrap();

        let answered = values.iter().filter(|q| q.iter().any(|p| *p > 0)).count();
        let total: f64 = raw.iter().map(|(_, score)| score).sum();
        prop_assert!((total - 10.0 * answered as f64).abs() < 1e-6);
        prop_assert!(raw.iter().all(|(_, score)| score >= 0.0));
    }

    #[test]
    fn raising_a_designated_choice_never_lowers_the_role(
        values in allocations(),
        role_index in 0usize..9,
        question in 0usize..10,
        bump in 1i64..=10,
    ) {
        let instrument = embedded_instrument();
        let role = Role::ALL[role_index];
        let designation = instrument
            .scoring_key()
            .designations(role)
            .unwrap()
            .iter()
            .find(|d| d.question.index() == question)
            .copied()
            .unwrap();

        let before = build(&instrument, &values);
        let mut raised = values.clone();
        let cell = &mut raised[question][designation.choice.index()];
        *cell = (*cell + bump).min(10);
        let after = build(&instrument, &raised);

        let score = |set: &AllocationSet| {
            RoleAggregator::aggregate(
                instrument.questionnaire(),
                instrument.scoring_key(),
                &Normalizer::normalize(set),
            )
            .unwrap()
            .get(role)
            .unwrap()
        };
        prop_assert!(score(&after) >= score(&before) - 1e-9);
    }

    #[test]
    fn pipeline_is_deterministic(values in allocations()) {
        let instrument = embedded_instrument();
        let set = build(&instrument, &values);
        let first = ScoringPipeline::run(&instrument, &set).unwrap();
        let second = ScoringPipeline::run(&instrument, &set).unwrap();
        prop_assert_eq!(first, second);
    }
}
