//! Classifier - banding of calibrated scores and the results summary.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Role;

/// Calibrated score at or above which a role is a natural role.
pub const NATURAL_THRESHOLD: u32 = 70;

/// Calibrated score at or above which a role is at least a secondary role.
pub const SECONDARY_THRESHOLD: u32 = 30;

/// Role-suitability band. Each band includes its lower threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleBand {
    Natural,
    Secondary,
    Avoided,
}

impl RoleBand {
    /// Returns the display label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            RoleBand::Natural => "natural role",
            RoleBand::Secondary => "secondary role",
            RoleBand::Avoided => "avoided role",
        }
    }
}

/// Scored outcome for one role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleResult {
    pub role: Role,
    pub display_name: String,
    pub raw_score: f64,
    pub calibrated_score: u32,
    pub band: RoleBand,
}

/// How the presentation layer should emphasize a result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Natural,
    Avoided,
}

/// A directive to emphasize one row of [`ResultsSummary::results`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub row: usize,
    pub role: Role,
    pub emphasis: Emphasis,
}

/// Results in scoring-key order plus highlighting directives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsSummary {
    pub results: Vec<RoleResult>,
    pub highlights: Vec<Highlight>,
}

impl ResultsSummary {
    /// Returns the result for a role.
    pub fn result(&self, role: Role) -> Option<&RoleResult> {
        self.results.iter().find(|result| result.role == role)
    }

    /// Returns the roles in a band, in result order.
    pub fn roles_in(&self, band: RoleBand) -> impl Iterator<Item = Role> + '_ {
        self.results
            .iter()
            .filter(move |result| result.band == band)
            .map(|result| result.role)
    }
}

/// Maps calibrated scores to bands.
pub struct Classifier;

impl Classifier {
    /// Returns the band for a calibrated score.
    pub fn classify(calibrated: u32) -> RoleBand {
        if calibrated >= NATURAL_THRESHOLD {
            RoleBand::Natural
        } else if calibrated >= SECONDARY_THRESHOLD {
            RoleBand::Secondary
        } else {
            RoleBand::Avoided
        }
    }

    /// Collects results, keeping their order, and derives the highlights.
    ///
    /// Natural rows are emphasized as natural, avoided rows as avoided;
    /// secondary rows get no directive.
    pub fn summarize(results: Vec<RoleResult>) -> ResultsSummary {
        let highlights = results
            .iter()
            .enumerate()
            .filter_map(|(row, result)| {
                let emphasis = match result.band {
                    RoleBand::Natural => Emphasis::Natural,
                    RoleBand::Avoided => Emphasis::Avoided,
                    RoleBand::Secondary => return None,
                };
                Some(Highlight {
                    row,
                    role: result.role,
                    emphasis,
                })
            })
            .collect();

        ResultsSummary {
            results,
            highlights,
        }
    }
}
