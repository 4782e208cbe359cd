//! Calibration tables - per-role lookup from raw to calibrated score.

use serde::Serialize;

use crate::domain::foundation::Role;

use super::documents::CalibrationDocument;
use super::roles::resolve_roles;
use super::violation::{Document, Violation};

/// One authored row of a calibration table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalibrationRow {
    pub raw: f64,
    pub calibrated: u32,
}

impl CalibrationRow {
    pub fn new(raw: f64, calibrated: u32) -> Self {
        Self { raw, calibrated }
    }
}

/// Rows of one role's table, sorted by descending raw score.
///
/// Tables built through [`CalibrationTables::from_document`] are strictly
/// descending and non-empty. [`CalibrationTable::from_rows`] performs no
/// checks, so lookups still guard against malformed rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CalibrationTable {
    rows: Vec<CalibrationRow>,
}

impl CalibrationTable {
    /// Wraps rows as given.
    pub fn from_rows(rows: Vec<CalibrationRow>) -> Self {
        Self { rows }
    }

    /// Returns the rows in table order.
    pub fn rows(&self) -> &[CalibrationRow] {
        &self.rows
    }

    /// Row with the greatest raw score.
    pub fn highest(&self) -> Option<&CalibrationRow> {
        self.rows.iter().max_by(|a, b| a.raw.total_cmp(&b.raw))
    }

    /// Row with the smallest raw score.
    pub fn lowest(&self) -> Option<&CalibrationRow> {
        self.rows.iter().min_by(|a, b| a.raw.total_cmp(&b.raw))
    }

    fn validate(role: Role, rows: &[(f64, f64)], violations: &mut Vec<Violation>) -> Vec<CalibrationRow> {
        if rows.is_empty() {
            violations.push(Violation::EmptyCalibration { role });
        }

        let mut validated = Vec::with_capacity(rows.len());
        let mut previous: Option<f64> = None;

        for (index, &(raw, calibrated)) in rows.iter().enumerate() {
            let row = index + 1;
            if !raw.is_finite() {
                violations.push(Violation::NonFiniteRaw { role, row, raw });
                continue;
            }

            if let Some(previous) = previous {
                if raw >= previous {
                    violations.push(Violation::NotDescending {
                        role,
                        row,
                        raw,
                        previous,
                    });
                }
            }
            previous = Some(raw);

            if !calibrated.is_finite()
                || calibrated < 0.0
                || calibrated.fract() != 0.0
                || calibrated > f64::from(u32::MAX)
            {
                violations.push(Violation::InvalidCalibrated {
                    role,
                    row,
                    value: calibrated,
                });
                continue;
            }

            validated.push(CalibrationRow::new(raw, calibrated as u32));
        }

        validated
    }
}

/// Calibration tables for every role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalibrationTables {
    tables: Vec<(Role, CalibrationTable)>,
}

impl CalibrationTables {
    /// Validates a calibration document, reporting every violation found.
    ///
    /// Raw scores must strictly descend: duplicate and out-of-order rows are
    /// rejected here rather than producing ambiguous lookups later.
    pub fn from_document(document: &CalibrationDocument) -> Result<Self, Vec<Violation>> {
        let mut violations = Vec::new();
        let tables = resolve_roles(Document::Calibration, document, &mut violations)
            .into_iter()
            .map(|(role, rows)| {
                let rows = CalibrationTable::validate(role, rows, &mut violations);
                (role, CalibrationTable::from_rows(rows))
            })
            .collect();

        if violations.is_empty() {
            Ok(Self { tables })
        } else {
            Err(violations)
        }
    }

    /// Builds tables from already-constructed parts, without validation.
    pub fn from_tables(tables: Vec<(Role, CalibrationTable)>) -> Self {
        Self { tables }
    }

    /// Returns the table for a role.
    pub fn get(&self, role: Role) -> Option<&CalibrationTable> {
        self.tables
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, table)| table)
    }

    /// Returns the roles in document order.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.tables.iter().map(|(role, _)| *role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(raw: &str) -> Result<CalibrationTables, Vec<Violation>> {
        let doc: CalibrationDocument = serde_json::from_str(raw).unwrap();
        CalibrationTables::from_document(&doc)
    }

    #[test]
    fn accepts_descending_rows() {
        let tables = tables(r#"{"plant": [[20, 80], [10, 40], [0.5, 0]]}"#).unwrap();
        let table = tables.get(Role::Plant).unwrap();
        assert_eq!(table.rows().len(), 3);
        assert_eq!(table.highest(), Some(&CalibrationRow::new(20.0, 80)));
        assert_eq!(table.lowest(), Some(&CalibrationRow::new(0.5, 0)));
    }

    #[test]
    fn rejects_duplicate_and_ascending_rows() {
        let violations = tables(r#"{"shaper": [[20, 80], [20, 70], [25, 90]]}"#).unwrap_err();
        assert_eq!(
            violations,
            vec![
                Violation::NotDescending {
                    role: Role::Shaper,
                    row: 2,
                    raw: 20.0,
                    previous: 20.0
                },
                Violation::NotDescending {
                    role: Role::Shaper,
                    row: 3,
                    raw: 25.0,
                    previous: 20.0
                },
            ]
        );
    }

    #[test]
    fn rejects_negative_and_fractional_calibrated_scores() {
        let violations = tables(r#"{"plant": [[20, -1], [10, 4.5]]}"#).unwrap_err();
        assert_eq!(
            violations,
            vec![
                Violation::InvalidCalibrated {
                    role: Role::Plant,
                    row: 1,
                    value: -1.0
                },
                Violation::InvalidCalibrated {
                    role: Role::Plant,
                    row: 2,
                    value: 4.5
                },
            ]
        );
    }

    #[test]
    fn rejects_empty_table() {
        let violations = tables(r#"{"coordinator": []}"#).unwrap_err();
        assert_eq!(violations, vec![Violation::EmptyCalibration { role: Role::Coordinator }]);
    }

    #[test]
    fn get_returns_none_for_absent_role() {
        let tables = tables(r#"{"plant": [[1, 1]]}"#).unwrap();
        assert!(tables.get(Role::Specialist).is_none());
    }
}
