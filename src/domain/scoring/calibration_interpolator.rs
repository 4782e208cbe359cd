//! Calibration Interpolator - piecewise-linear lookup of calibrated scores.
//!
//! Lookup order for a raw score:
//! 1. Exact row match returns the authored value unchanged
//! 2. At or above the highest row clamps to that row
//! 3. At or below the lowest row clamps to that row
//! 4. Otherwise interpolates between the adjacent bracketing rows,
//!    truncating toward zero

use crate::domain::foundation::Role;
use crate::domain::instrument::{CalibrationTable, CalibrationTables};

use super::errors::ScoringError;

/// Maps raw role scores to calibrated scores.
pub struct CalibrationInterpolator;

impl CalibrationInterpolator {
    /// Calibrates a role's raw score using that role's table.
    pub fn calibrate(
        tables: &CalibrationTables,
        role: Role,
        raw: f64,
    ) -> Result<u32, ScoringError> {
        let table = tables
            .get(role)
            .ok_or(ScoringError::MissingCalibration { role })?;
        Self::interpolate(table, role, raw)
    }

    /// Looks a raw score up in one table. `role` only labels errors.
    ///
    /// # Errors
    ///
    /// Validated tables never fail; these guard tables built with
    /// [`CalibrationTable::from_rows`]:
    /// - `NonFiniteScore` for NaN or infinite input
    /// - `EmptyCalibration` if the table has no rows
    /// - `AmbiguousCalibration` if several rows share the raw score
    /// - `CalibrationGap` if no adjacent pair brackets an in-range score
    pub fn interpolate(table: &CalibrationTable, role: Role, raw: f64) -> Result<u32, ScoringError> {
        if !raw.is_finite() {
            return Err(ScoringError::NonFiniteScore { role, raw });
        }
        let (Some(highest), Some(lowest)) = (table.highest(), table.lowest()) else {
            return Err(ScoringError::EmptyCalibration { role });
        };

        let mut exact = table.rows().iter().filter(|row| row.raw == raw);
        if let Some(row) = exact.next() {
            let matches = 1 + exact.count();
            if matches > 1 {
                return Err(ScoringError::AmbiguousCalibration { role, raw, matches });
            }
            return Ok(row.calibrated);
        }

        if raw >= highest.raw {
            return Ok(highest.calibrated);
        }
        if raw <= lowest.raw {
            return Ok(lowest.calibrated);
        }

        table
            .rows()
            .windows(2)
            .find(|pair| pair[0].raw >= raw && raw >= pair[1].raw)
            .map(|pair| {
                let (high, low) = (pair[0], pair[1]);
                let slope = (f64::from(low.calibrated) - f64::from(high.calibrated))
                    / (low.raw - high.raw);
                let calibrated = f64::from(high.calibrated) + slope * (raw - high.raw);
                // Both ends are non-negative, so only rounding noise can dip below zero.
                calibrated.trunc().max(0.0) as u32
            })
            .ok_or(ScoringError::CalibrationGap { role, raw })
    }
}
