//! Role Aggregator - sums normalized points along each role's scoring key.

use serde::Serialize;

use crate::domain::foundation::Role;
use crate::domain::instrument::{Questionnaire, ScoringKey};

use super::allocation::NormalizedAllocations;
use super::errors::ScoringError;

/// One raw score per keyed role, in scoring-key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawScores {
    scores: Vec<(Role, f64)>,
}

impl RawScores {
    /// Returns the raw score of a role, if the key lists it.
    pub fn get(&self, role: Role) -> Option<f64> {
        self.scores
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, score)| *score)
    }

    /// Iterates `(role, raw score)` in scoring-key order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, f64)> + '_ {
        self.scores.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Computes raw role scores from normalized allocations.
pub struct RoleAggregator;

impl RoleAggregator {
    /// Sums, for every role, the normalized points on its designated choices.
    ///
    /// A validated key designates one choice per question for every role,
    /// so each raw score sums over the whole questionnaire.
    ///
    /// # Errors
    ///
    /// - `UnknownDesignation` if the key points at a cell the questionnaire
    ///   lacks (ruled out for a validated instrument)
    /// - `MissingAllocation` if the allocations were shaped after a
    ///   different questionnaire
    pub fn aggregate(
        questionnaire: &Questionnaire,
        key: &ScoringKey,
        allocations: &NormalizedAllocations,
    ) -> Result<RawScores, ScoringError> {
        let mut scores = Vec::with_capacity(key.role_keys().len());

        for role_key in key.role_keys() {
            let mut raw = 0.0;
            for designation in &role_key.designations {
                if !questionnaire.offers(designation.question, designation.choice) {
                    return Err(ScoringError::UnknownDesignation {
                        role: role_key.role,
                        question: designation.question,
                        choice: designation.choice,
                    });
                }
                raw += allocations
                    .get(designation.question, designation.choice)
                    .ok_or(ScoringError::MissingAllocation {
                        role: role_key.role,
                        question: designation.question,
                        choice: designation.choice,
                    })?;
            }
            scores.push((role_key.role, raw));
        }

        Ok(RawScores { scores })
    }
}
