//! Strongly-typed identifier value objects.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Largest number of choices a question may carry (one per letter A-Z).
pub const MAX_CHOICES: usize = 26;

/// Largest number of questions a questionnaire may carry.
pub const MAX_QUESTIONS: usize = u16::MAX as usize;

/// 1-based position of a question in the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionId(u16);

impl QuestionId {
    /// Creates a QuestionId, rejecting zero.
    pub fn new(number: u16) -> Result<Self, ValidationError> {
        if number == 0 {
            return Err(ValidationError::out_of_range(
                "question",
                1,
                i32::from(u16::MAX),
                0,
            ));
        }
        Ok(Self(number))
    }

    /// Creates a QuestionId from a zero-based position.
    pub fn from_index(index: usize) -> Result<Self, ValidationError> {
        index
            .checked_add(1)
            .and_then(|number| u16::try_from(number).ok())
            .map(Self)
            .ok_or_else(|| {
                ValidationError::out_of_range(
                    "question index",
                    0,
                    MAX_QUESTIONS as i32 - 1,
                    i32::try_from(index).unwrap_or(i32::MAX),
                )
            })
    }

    /// Returns the question number.
    pub fn number(&self) -> u16 {
        self.0
    }

    /// Returns the zero-based position.
    pub fn index(&self) -> usize {
        usize::from(self.0) - 1
    }

    /// Parses a document key of the form `Q<n>`.
    pub fn parse_key(key: &str) -> Result<Self, ValidationError> {
        let digits = key
            .strip_prefix('Q')
            .or_else(|| key.strip_prefix('q'))
            .ok_or_else(|| ValidationError::invalid_format("question", "expected Q<number>"))?;
        Self::from_str(digits)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .trim()
            .parse::<u16>()
            .map_err(|_| ValidationError::invalid_format("question", format!("'{}' is not a number", s)))?;
        Self::new(number)
    }
}

impl Serialize for QuestionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = u16::deserialize(deserializer)?;
        Self::new(number).map_err(serde::de::Error::custom)
    }
}

/// Lettered choice within a question: `A` is index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChoiceId(u8);

impl ChoiceId {
    /// Creates a ChoiceId from a zero-based index.
    pub fn from_index(index: usize) -> Result<Self, ValidationError> {
        if index >= MAX_CHOICES {
            return Err(ValidationError::out_of_range(
                "choice",
                0,
                MAX_CHOICES as i32 - 1,
                index as i32,
            ));
        }
        Ok(Self(index as u8))
    }

    /// Creates a ChoiceId from a letter, case-insensitively.
    pub fn from_letter(letter: char) -> Result<Self, ValidationError> {
        if !letter.is_ascii_alphabetic() {
            return Err(ValidationError::invalid_format(
                "choice",
                format!("'{}' is not a letter", letter),
            ));
        }
        Ok(Self(letter.to_ascii_uppercase() as u8 - b'A'))
    }

    /// Returns the zero-based index.
    pub fn index(&self) -> usize {
        usize::from(self.0)
    }

    /// Returns the upper-case letter.
    pub fn letter(&self) -> char {
        char::from(b'A' + self.0)
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for ChoiceId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::from_letter(letter),
            _ => Err(ValidationError::invalid_format(
                "choice",
                format!("'{}' is not a single letter", trimmed),
            )),
        }
    }
}

impl Serialize for ChoiceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChoiceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The nine team roles scored by the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Plant,
    ResourceInvestigator,
    Coordinator,
    Shaper,
    MonitorEvaluator,
    Teamworker,
    Implementer,
    CompleterFinisher,
    Specialist,
}

impl Role {
    /// All roles in canonical order.
    pub const ALL: [Role; 9] = [
        Role::Plant,
        Role::ResourceInvestigator,
        Role::Coordinator,
        Role::Shaper,
        Role::MonitorEvaluator,
        Role::Teamworker,
        Role::Implementer,
        Role::CompleterFinisher,
        Role::Specialist,
    ];

    /// Returns the tag used in instrument documents.
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Plant => "plant",
            Role::ResourceInvestigator => "resource_investigator",
            Role::Coordinator => "coordinator",
            Role::Shaper => "shaper",
            Role::MonitorEvaluator => "monitor_evaluator",
            Role::Teamworker => "teamworker",
            Role::Implementer => "implementer",
            Role::CompleterFinisher => "completer_finisher",
            Role::Specialist => "specialist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.tag() == normalized)
            .ok_or_else(|| {
                ValidationError::invalid_format("role", format!("'{}' is not a recognized role", s))
            })
    }
}
