//! Allocation sets - the points a respondent spread over each question's choices.

use serde::Serialize;
use std::collections::HashSet;

use crate::domain::foundation::{ChoiceId, Points, QuestionId};
use crate::domain::instrument::Questionnaire;

use super::errors::AllocationError;

/// One submitted `(question, choice, points)` triple, points not yet range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationEntry {
    pub question: QuestionId,
    pub choice: ChoiceId,
    pub points: i64,
}

impl AllocationEntry {
    pub fn new(question: QuestionId, choice: ChoiceId, points: i64) -> Self {
        Self {
            question,
            choice,
            points,
        }
    }
}

/// Raw points per question and choice, shaped after one questionnaire.
///
/// Owned by a single respondent session. Totals are unconstrained until
/// normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationSet {
    questions: Vec<(QuestionId, Vec<Points>)>,
}

impl AllocationSet {
    /// Creates a set with zero points on every choice of every question.
    pub fn blank(questionnaire: &Questionnaire) -> Self {
        Self {
            questions: questionnaire
                .questions()
                .iter()
                .map(|question| (question.id, vec![Points::ZERO; question.choice_count()]))
                .collect(),
        }
    }

    /// Builds a set from submitted entries; unlisted choices stay at zero.
    ///
    /// Every invalid entry is reported, not just the first.
    pub fn from_entries(
        questionnaire: &Questionnaire,
        entries: impl IntoIterator<Item = AllocationEntry>,
    ) -> Result<Self, Vec<AllocationError>> {
        let mut set = Self::blank(questionnaire);
        let mut seen: HashSet<(QuestionId, ChoiceId)> = HashSet::new();
        let mut errors = Vec::new();

        for entry in entries {
            if !seen.insert((entry.question, entry.choice)) {
                errors.push(AllocationError::DuplicateEntry {
                    question: entry.question,
                    choice: entry.choice,
                });
                continue;
            }

            let points = match Points::try_new(entry.points) {
                Ok(points) => points,
                Err(source) => {
                    errors.push(AllocationError::InvalidPoints {
                        question: entry.question,
                        choice: entry.choice,
                        source,
                    });
                    continue;
                }
            };

            if let Err(err) = set.set(entry.question, entry.choice, points) {
                errors.push(err);
            }
        }

        if errors.is_empty() {
            Ok(set)
        } else {
            Err(errors)
        }
    }

    /// Records the points for one choice, replacing any previous value.
    pub fn set(
        &mut self,
        question: QuestionId,
        choice: ChoiceId,
        points: Points,
    ) -> Result<(), AllocationError> {
        let (_, choices) = self
            .questions
            .get_mut(question.index())
            .ok_or(AllocationError::UnknownQuestion { question })?;
        let slot = choices
            .get_mut(choice.index())
            .ok_or(AllocationError::UnknownChoice { question, choice })?;
        *slot = points;
        Ok(())
    }

    /// Returns the points recorded for one choice.
    pub fn get(&self, question: QuestionId, choice: ChoiceId) -> Option<Points> {
        self.question(question)?.get(choice.index()).copied()
    }

    /// Returns one question's points, indexed by choice.
    pub fn question(&self, question: QuestionId) -> Option<&[Points]> {
        self.questions
            .get(question.index())
            .map(|(_, points)| points.as_slice())
    }

    /// Iterates questions in order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &[Points])> {
        self.questions
            .iter()
            .map(|(question, points)| (*question, points.as_slice()))
    }

    /// Returns the number of questions covered.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if the set covers no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Points after per-question rescaling; see [`super::Normalizer`].
///
/// Only the normalizer constructs this, so holding one proves the rescaling
/// has been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedAllocations {
    questions: Vec<(QuestionId, Vec<f64>)>,
}

impl NormalizedAllocations {
    pub(super) fn new(questions: Vec<(QuestionId, Vec<f64>)>) -> Self {
        Self { questions }
    }

    /// Returns the normalized points for one choice.
    pub fn get(&self, question: QuestionId, choice: ChoiceId) -> Option<f64> {
        self.question(question)?.get(choice.index()).copied()
    }

    /// Returns one question's normalized points, indexed by choice.
    pub fn question(&self, question: QuestionId) -> Option<&[f64]> {
        self.questions
            .get(question.index())
            .map(|(_, points)| points.as_slice())
    }

    /// Iterates questions in order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &[f64])> {
        self.questions
            .iter()
            .map(|(question, points)| (*question, points.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instrument::QuestionnaireDocument;

    fn questionnaire() -> Questionnaire {
        let doc: QuestionnaireDocument = serde_json::from_str(
            r#"{
                "Q1": {"prompt": "p1", "A": "a", "B": "b"},
                "Q2": {"prompt": "p2", "A": "a", "B": "b", "C": "c"}
            }"#,
        )
        .unwrap();
        Questionnaire::from_document(&doc).unwrap()
    }

    fn q(n: u16) -> QuestionId {
        QuestionId::new(n).unwrap()
    }

    fn c(letter: char) -> ChoiceId {
        ChoiceId::from_letter(letter).unwrap()
    }

    #[test]
    fn blank_set_matches_questionnaire_shape() {
        let set = AllocationSet::blank(&questionnaire());
        assert_eq!(set.len(), 2);
        assert_eq!(set.question(q(1)).unwrap().len(), 2);
        assert_eq!(set.question(q(2)).unwrap().len(), 3);
        assert!(set.iter().all(|(_, points)| points.iter().all(|p| *p == Points::ZERO)));
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut set = AllocationSet::blank(&questionnaire());
        set.set(q(2), c('C'), Points::try_new(4).unwrap()).unwrap();
        set.set(q(2), c('C'), Points::try_new(6).unwrap()).unwrap();
        assert_eq!(set.get(q(2), c('C')), Some(Points::try_new(6).unwrap()));
    }

    #[test]
    fn set_rejects_cells_outside_questionnaire() {
        let mut set = AllocationSet::blank(&questionnaire());
        assert_eq!(
            set.set(q(3), c('A'), Points::MAX),
            Err(AllocationError::UnknownQuestion { question: q(3) })
        );
        assert_eq!(
            set.set(q(1), c('C'), Points::MAX),
            Err(AllocationError::UnknownChoice {
                question: q(1),
                choice: c('C')
            })
        );
    }

    #[test]
    fn from_entries_leaves_unlisted_choices_at_zero() {
        let set = AllocationSet::from_entries(
            &questionnaire(),
            vec![
                AllocationEntry::new(q(1), c('A'), 7),
                AllocationEntry::new(q(2), c('B'), 10),
            ],
        )
        .unwrap();

        assert_eq!(set.get(q(1), c('A')).unwrap().value(), 7);
        assert_eq!(set.get(q(1), c('B')).unwrap().value(), 0);
        assert_eq!(set.get(q(2), c('B')).unwrap().value(), 10);
    }

    #[test]
    fn from_entries_reports_every_bad_entry() {
        let errors = AllocationSet::from_entries(
            &questionnaire(),
            vec![
                AllocationEntry::new(q(1), c('A'), 11),
                AllocationEntry::new(q(1), c('B'), 3),
                AllocationEntry::new(q(1), c('B'), 4),
                AllocationEntry::new(q(5), c('A'), 1),
            ],
        )
        .unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], AllocationError::InvalidPoints { .. }));
        assert_eq!(
            errors[1],
            AllocationError::DuplicateEntry {
                question: q(1),
                choice: c('B')
            }
        );
        assert_eq!(errors[2], AllocationError::UnknownQuestion { question: q(5) });
    }

    #[test]
    fn from_entries_flags_each_repeat_of_a_cell() {
        let entries = std::iter::repeat(AllocationEntry::new(q(2), c('C'), 5))
            .take(5_000)
            .chain([AllocationEntry::new(q(1), c('A'), 2)]);

        let errors = AllocationSet::from_entries(&questionnaire(), entries).unwrap_err();

        assert_eq!(errors.len(), 4_999);
        assert!(errors.iter().all(|err| *err
            == AllocationError::DuplicateEntry {
                question: q(2),
                choice: c('C')
            }));
    }

    #[test]
    fn iter_yields_question_ids_in_order() {
        let set = AllocationSet::blank(&questionnaire());
        let ids: Vec<QuestionId> = set.iter().map(|(question, _)| question).collect();
        assert_eq!(ids, vec![q(1), q(2)]);
    }
}
