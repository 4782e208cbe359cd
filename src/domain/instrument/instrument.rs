//! Instrument - the immutable bundle every scoring call reads from.

use std::collections::BTreeSet;

use crate::domain::foundation::Role;

use super::calibration::CalibrationTables;
use super::documents::InstrumentDocuments;
use super::questionnaire::Questionnaire;
use super::roles::RoleNames;
use super::scoring_key::ScoringKey;
use super::violation::{Document, InstrumentError, Violation};

/// Questionnaire, scoring key, calibration tables, and display names,
/// validated together once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    questionnaire: Questionnaire,
    scoring_key: ScoringKey,
    calibration: CalibrationTables,
    role_names: RoleNames,
}

impl Instrument {
    /// Validates all four documents and their cross-references.
    ///
    /// Every document is checked even when an earlier one fails, so the
    /// error lists every violation rather than the first one found.
    pub fn from_documents(documents: &InstrumentDocuments) -> Result<Self, InstrumentError> {
        let mut violations = Vec::new();

        let questionnaire = Questionnaire::from_document(&documents.questionnaire);
        let scoring_key = ScoringKey::from_document(&documents.scoring_key);
        let calibration = CalibrationTables::from_document(&documents.calibration);
        let role_names = RoleNames::from_document(&documents.role_names);

        for result_violations in [
            questionnaire.as_ref().err(),
            scoring_key.as_ref().err(),
            calibration.as_ref().err(),
            role_names.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        {
            violations.extend(result_violations.iter().cloned());
        }

        if let (Ok(questionnaire), Ok(scoring_key)) = (&questionnaire, &scoring_key) {
            violations.extend(scoring_key.check_against(questionnaire));
        }

        if let (Ok(scoring_key), Ok(calibration), Ok(role_names)) =
            (&scoring_key, &calibration, &role_names)
        {
            violations.extend(role_set_violations(&[
                (Document::ScoringKey, scoring_key.roles().collect::<BTreeSet<_>>()),
                (Document::Calibration, calibration.roles().collect::<BTreeSet<_>>()),
                (Document::RoleNames, role_names.roles().collect::<BTreeSet<_>>()),
            ]));
        }

        match (questionnaire, scoring_key, calibration, role_names) {
            (Ok(questionnaire), Ok(scoring_key), Ok(calibration), Ok(role_names))
                if violations.is_empty() =>
            {
                Ok(Self {
                    questionnaire,
                    scoring_key,
                    calibration,
                    role_names,
                })
            }
            _ => Err(InstrumentError::new(violations)),
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn scoring_key(&self) -> &ScoringKey {
        &self.scoring_key
    }

    pub fn calibration(&self) -> &CalibrationTables {
        &self.calibration
    }

    pub fn role_names(&self) -> &RoleNames {
        &self.role_names
    }
}

/// Reports every role that some role-keyed documents list and others omit.
fn role_set_violations(sets: &[(Document, BTreeSet<Role>)]) -> Vec<Violation> {
    let all: BTreeSet<Role> = sets.iter().flat_map(|(_, roles)| roles.iter().copied()).collect();
    let mut violations = Vec::new();
    for role in all {
        for (document, roles) in sets {
            if !roles.contains(&role) {
                violations.push(Violation::RoleMissing {
                    role,
                    document: *document,
                });
            }
        }
    }
    violations
}
