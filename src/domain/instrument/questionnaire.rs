//! Questionnaire model - questions and their lettered choices.

use serde::Serialize;

use crate::domain::foundation::{ChoiceId, QuestionId, MAX_CHOICES, MAX_QUESTIONS};

use super::documents::QuestionnaireDocument;
use super::violation::Violation;

/// Document key holding a question's prompt text.
pub const PROMPT_KEY: &str = "prompt";

/// One lettered statement a respondent can allocate points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub text: String,
}

/// A question with its prompt and ordered choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub choices: Vec<Choice>,
}

impl Question {
    /// Returns the number of choices offered.
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// Returns true if the question offers the given choice.
    pub fn offers(&self, choice: ChoiceId) -> bool {
        choice.index() < self.choices.len()
    }
}

/// Immutable, validated questionnaire. Questions are numbered 1..N.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    /// Validates a questionnaire document, reporting every violation found.
    pub fn from_document(document: &QuestionnaireDocument) -> Result<Self, Vec<Violation>> {
        let mut violations = Vec::new();
        let mut questions = Vec::with_capacity(document.len());

        if document.is_empty() {
            violations.push(Violation::EmptyQuestionnaire);
        }

        for (index, (key, fields)) in document.iter().enumerate() {
            let Ok(id) = QuestionId::from_index(index) else {
                violations.push(Violation::TooManyQuestions {
                    count: document.len(),
                    max: MAX_QUESTIONS,
                });
                break;
            };
            match QuestionId::parse_key(key) {
                Ok(parsed) if parsed == id => {}
                _ => violations.push(Violation::QuestionNumbering {
                    position: index + 1,
                    key: key.to_string(),
                }),
            }

            let label = id.to_string();
            let mut prompt: Option<&str> = None;
            let mut choices = Vec::new();
            let mut overflow = 0;

            for (field, text) in fields.iter() {
                if field == PROMPT_KEY {
                    if prompt.is_some() {
                        violations.push(Violation::DuplicateField {
                            question: label.clone(),
                            key: field.to_string(),
                        });
                    } else {
                        prompt = Some(text.as_str());
                    }
                    continue;
                }

                let position = choices.len();
                let Ok(expected) = ChoiceId::from_index(position) else {
                    overflow += 1;
                    continue;
                };
                if field != expected.letter().to_string() {
                    violations.push(Violation::ChoiceSequence {
                        question: label.clone(),
                        position: position + 1,
                        key: field.to_string(),
                        expected: expected.letter(),
                    });
                }
                choices.push(Choice {
                    id: expected,
                    text: text.clone(),
                });
            }

            match prompt {
                None => violations.push(Violation::MissingPrompt {
                    question: label.clone(),
                }),
                Some(text) if text.trim().is_empty() => violations.push(Violation::EmptyPrompt {
                    question: label.clone(),
                }),
                Some(_) => {}
            }

            if choices.is_empty() {
                violations.push(Violation::NoChoices {
                    question: label.clone(),
                });
            } else if overflow > 0 {
                violations.push(Violation::TooManyChoices {
                    question: label,
                    count: choices.len() + overflow,
                    max: MAX_CHOICES,
                });
            }

            questions.push(Question {
                id,
                prompt: prompt.unwrap_or_default().to_string(),
                choices,
            });
        }

        if violations.is_empty() {
            Ok(Self { questions })
        } else {
            Err(violations)
        }
    }

    /// Returns the questions in order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Looks up a question by id.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(id.index())
    }

    /// Returns true if the question exists and offers the choice.
    pub fn offers(&self, question: QuestionId, choice: ChoiceId) -> bool {
        self.question(question).is_some_and(|q| q.offers(choice))
    }

    /// Returns the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a validated questionnaire.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
