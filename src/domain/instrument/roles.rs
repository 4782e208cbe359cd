//! Role-keyed documents: tag parsing shared by every table, and display names.

use serde::Serialize;

use crate::domain::foundation::Role;

use super::documents::RoleNamesDocument;
use super::ordered::OrderedEntries;
use super::violation::{Document, Violation};

/// Resolves role tags in document order, reporting unknown and repeated tags.
///
/// Only the first occurrence of a repeated role is kept.
pub(crate) fn resolve_roles<'a, V>(
    document: Document,
    entries: &'a OrderedEntries<V>,
    violations: &mut Vec<Violation>,
) -> Vec<(Role, &'a V)> {
    let mut resolved: Vec<(Role, &V)> = Vec::with_capacity(entries.len());
    for (tag, value) in entries.iter() {
        match tag.parse::<Role>() {
            Ok(role) if resolved.iter().any(|(seen, _)| *seen == role) => {
                violations.push(Violation::DuplicateRole { document, role });
            }
            Ok(role) => resolved.push((role, value)),
            Err(_) => violations.push(Violation::UnknownRole {
                document,
                tag: tag.to_string(),
            }),
        }
    }
    resolved
}

/// Human-readable display name per role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleNames {
    names: Vec<(Role, String)>,
}

impl RoleNames {
    /// Validates a role names document, reporting every violation found.
    pub fn from_document(document: &RoleNamesDocument) -> Result<Self, Vec<Violation>> {
        let mut violations = Vec::new();
        let names: Vec<(Role, String)> = resolve_roles(Document::RoleNames, document, &mut violations)
            .into_iter()
            .map(|(role, name)| (role, name.trim().to_string()))
            .collect();

        for (role, name) in &names {
            if name.is_empty() {
                violations.push(Violation::EmptyDisplayName { role: *role });
            }
        }

        if violations.is_empty() {
            Ok(Self { names })
        } else {
            Err(violations)
        }
    }

    /// Returns the display name for a role.
    pub fn get(&self, role: Role) -> Option<&str> {
        self.names
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, name)| name.as_str())
    }

    /// Returns the roles in document order.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.names.iter().map(|(role, _)| *role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_tags_and_reports_the_rest() {
        let entries: OrderedEntries<u8> =
            serde_json::from_str(r#"{"plant": 1, "wizard": 2, "shaper": 3, "Plant": 4}"#).unwrap();
        let mut violations = Vec::new();

        let resolved = resolve_roles(Document::ScoringKey, &entries, &mut violations);

        assert_eq!(resolved, vec![(Role::Plant, &1), (Role::Shaper, &3)]);
        assert_eq!(
            violations,
            vec![
                Violation::UnknownRole {
                    document: Document::ScoringKey,
                    tag: "wizard".to_string()
                },
                Violation::DuplicateRole {
                    document: Document::ScoringKey,
                    role: Role::Plant
                },
            ]
        );
    }

    #[test]
    fn role_names_trims_and_looks_up() {
        let doc: RoleNamesDocument =
            serde_json::from_str(r#"{"teamworker": " Teamworker "}"#).unwrap();
        let names = RoleNames::from_document(&doc).unwrap();
        assert_eq!(names.get(Role::Teamworker), Some("Teamworker"));
        assert_eq!(names.get(Role::Plant), None);
    }

    #[test]
    fn role_names_rejects_blank_names() {
        let doc: RoleNamesDocument = serde_json::from_str(r#"{"plant": "   "}"#).unwrap();
        let violations = RoleNames::from_document(&doc).unwrap_err();
        assert_eq!(violations, vec![Violation::EmptyDisplayName { role: Role::Plant }]);
    }
}
