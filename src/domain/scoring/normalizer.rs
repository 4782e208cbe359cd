//! Normalizer - per-question proportional rescaling of allocations.

use crate::domain::foundation::Points;

use super::allocation::{AllocationSet, NormalizedAllocations};

/// Total every non-empty question is rescaled to: the point units one
/// question's input control hands out.
pub const NORMALIZED_TOTAL: f64 = 10.0;

/// Rescales allocations so questions are comparable regardless of how many
/// points the respondent actually spent on each.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes every question of the set independently.
    pub fn normalize(allocations: &AllocationSet) -> NormalizedAllocations {
        NormalizedAllocations::new(
            allocations
                .iter()
                .map(|(question, points)| (question, Self::normalize_question(points)))
                .collect(),
        )
    }

    /// Rescales one question's points to sum to [`NORMALIZED_TOTAL`],
    /// preserving proportions.
    ///
    /// # Edge Cases
    /// - All zero: returned as all zero; a question left blank is valid
    /// - Already summing to 10: values unchanged
    pub fn normalize_question(points: &[Points]) -> Vec<f64> {
        let total: u32 = points.iter().map(|p| u32::from(p.value())).sum();
        if total == 0 {
            return vec![0.0; points.len()];
        }

        // Multiply first so a question already summing to the total is
        // reproduced exactly.
        let total = f64::from(total);
        points
            .iter()
            .map(|p| p.as_f64() * NORMALIZED_TOTAL / total)
            .collect()
    }
}
