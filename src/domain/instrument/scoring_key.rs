//! Scoring key - which choice counts toward each role, question by question.

use serde::Serialize;

use crate::domain::foundation::{ChoiceId, QuestionId, Role};

use super::documents::ScoringKeyDocument;
use super::questionnaire::Questionnaire;
use super::roles::resolve_roles;
use super::violation::{Document, Violation};

/// A role's designated choice for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Designation {
    pub question: QuestionId,
    pub choice: ChoiceId,
}

/// The designations of a single role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleKey {
    pub role: Role,
    pub designations: Vec<Designation>,
}

/// Per-role designations. Role order is the document order and is the order
/// results are reported in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringKey {
    keys: Vec<RoleKey>,
}

impl ScoringKey {
    /// Parses a scoring key document on its own, without a questionnaire.
    pub fn from_document(document: &ScoringKeyDocument) -> Result<Self, Vec<Violation>> {
        let mut violations = Vec::new();
        let mut keys = Vec::new();

        for (role, entries) in resolve_roles(Document::ScoringKey, document, &mut violations) {
            let mut designations: Vec<Designation> = Vec::with_capacity(entries.len());
            for (question_key, value) in entries.iter() {
                let question = match question_key.parse::<QuestionId>() {
                    Ok(question) => question,
                    Err(_) => {
                        violations.push(Violation::InvalidKeyQuestion {
                            role,
                            key: question_key.to_string(),
                        });
                        continue;
                    }
                };

                if designations.iter().any(|d| d.question == question) {
                    violations.push(Violation::DuplicateKeyQuestion { role, question });
                    continue;
                }

                match value.parse::<ChoiceId>() {
                    Ok(choice) => designations.push(Designation { question, choice }),
                    Err(_) => violations.push(Violation::InvalidKeyChoice {
                        role,
                        question,
                        value: value.clone(),
                    }),
                }
            }
            keys.push(RoleKey { role, designations });
        }

        if violations.is_empty() {
            Ok(Self { keys })
        } else {
            Err(violations)
        }
    }

    /// Reports designations that point outside the questionnaire, and
    /// questions a role designates no choice for.
    pub fn check_against(&self, questionnaire: &Questionnaire) -> Vec<Violation> {
        let mut violations = Vec::new();
        for key in &self.keys {
            for question in questionnaire.questions() {
                if !key.designations.iter().any(|d| d.question == question.id) {
                    violations.push(Violation::MissingKeyQuestion {
                        role: key.role,
                        question: question.id,
                    });
                }
            }
            for designation in &key.designations {
                match questionnaire.question(designation.question) {
                    None => violations.push(Violation::UnknownQuestion {
                        role: key.role,
                        question: designation.question,
                    }),
                    Some(question) if !question.offers(designation.choice) => {
                        violations.push(Violation::UnknownChoice {
                            role: key.role,
                            question: designation.question,
                            choice: designation.choice.letter(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }
        violations
    }

    /// Returns the roles in document order.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.keys.iter().map(|key| key.role)
    }

    /// Returns every role's designations in document order.
    pub fn role_keys(&self) -> &[RoleKey] {
        &self.keys
    }

    /// Returns the designations of one role.
    pub fn designations(&self, role: Role) -> Option<&[Designation]> {
        self.keys
            .iter()
            .find(|key| key.role == role)
            .map(|key| key.designations.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> Result<ScoringKey, Vec<Violation>> {
        let doc: ScoringKeyDocument = serde_json::from_str(raw).unwrap();
        ScoringKey::from_document(&doc)
    }

    fn q(n: u16) -> QuestionId {
        QuestionId::new(n).unwrap()
    }

    #[test]
    fn parses_designations_case_insensitively() {
        let key = key(r#"{"shaper": {"1": "b", "2": "A"}}"#).unwrap();
        let designations = key.designations(Role::Shaper).unwrap();
        assert_eq!(designations.len(), 2);
        assert_eq!(designations[0].question, q(1));
        assert_eq!(designations[0].choice.letter(), 'B');
        assert_eq!(designations[1].choice.letter(), 'A');
    }

    #[test]
    fn keeps_role_order_from_document() {
        let key = key(
            r#"{
                "specialist": {"1": "A"},
                "plant": {"1": "B"},
                "coordinator": {"1": "C"}
            }"#,
        )
        .unwrap();
        let roles: Vec<Role> = key.roles().collect();
        assert_eq!(roles, vec![Role::Specialist, Role::Plant, Role::Coordinator]);
    }

    #[test]
    fn reports_malformed_entries() {
        let violations = key(
            r#"{
                "plant": {"one": "A", "2": "AB", "3": "C", "3": "D"},
                "boss": {"1": "A"}
            }"#,
        )
        .unwrap_err();

        assert_eq!(violations.len(), 4);
        assert!(violations.contains(&Violation::InvalidKeyQuestion {
            role: Role::Plant,
            key: "one".to_string()
        }));
        assert!(violations.contains(&Violation::InvalidKeyChoice {
            role: Role::Plant,
            question: q(2),
            value: "AB".to_string()
        }));
        assert!(violations.contains(&Violation::DuplicateKeyQuestion {
            role: Role::Plant,
            question: q(3)
        }));
        assert!(violations.contains(&Violation::UnknownRole {
            document: Document::ScoringKey,
            tag: "boss".to_string()
        }));
    }

    #[test]
    fn check_against_reports_missing_questions_and_choices() {
        let questionnaire_doc =
            serde_json::from_str(r#"{"Q1": {"prompt": "p", "A": "a", "B": "b"}}"#).unwrap();
        let questionnaire = Questionnaire::from_document(&questionnaire_doc).unwrap();
        let key = key(r#"{"implementer": {"1": "C", "2": "A"}}"#).unwrap();

        let violations = key.check_against(&questionnaire);

        assert_eq!(
            violations,
            vec![
                Violation::UnknownChoice {
                    role: Role::Implementer,
                    question: q(1),
                    choice: 'C'
                },
                Violation::UnknownQuestion {
                    role: Role::Implementer,
                    question: q(2)
                },
            ]
        );
    }

    #[test]
    fn check_against_requires_every_question_per_role() {
        let questionnaire_doc = serde_json::from_str(
            r#"{
                "Q1": {"prompt": "p1", "A": "a", "B": "b"},
                "Q2": {"prompt": "p2", "A": "a", "B": "b"},
                "Q3": {"prompt": "p3", "A": "a", "B": "b"}
            }"#,
        )
        .unwrap();
        let questionnaire = Questionnaire::from_document(&questionnaire_doc).unwrap();
        let key = key(r#"{"plant": {"1": "A"}, "shaper": {"3": "B", "1": "A", "2": "A"}}"#).unwrap();

        let violations = key.check_against(&questionnaire);

        assert_eq!(
            violations,
            vec![
                Violation::MissingKeyQuestion {
                    role: Role::Plant,
                    question: q(2)
                },
                Violation::MissingKeyQuestion {
                    role: Role::Plant,
                    question: q(3)
                },
            ]
        );
    }
}
