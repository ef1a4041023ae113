//! Measurement status classification against ISO tolerance bands.
//!
//! A measurement passes when it lies inside `[min, max]`. Outside the band
//! there is a 5% grace margin, computed multiplicatively against each bound
//! on its own, inside which the result is downgraded to a warning.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// The value lies inside the tolerance band.
pub const STATUS_PASS: &str = "pass";
/// The value lies outside the band but within the grace margin.
pub const STATUS_WARNING: &str = "warning";
/// The value lies outside the band and the grace margin.
pub const STATUS_FAIL: &str = "fail";

/// All valid status strings, matching the `measurement_status` column check.
pub const VALID_STATUSES: &[&str] = &[STATUS_PASS, STATUS_WARNING, STATUS_FAIL];

/// Grace margin as a fraction of the violated bound.
pub const GRACE_MARGIN: f64 = 0.05;

/// Lower bound multiplier: values in `[min * 0.95, min)` are warnings.
const LOWER_GRACE_FACTOR: f64 = 0.95;
/// Upper bound multiplier: values in `(max, max * 1.05]` are warnings.
const UPPER_GRACE_FACTOR: f64 = 1.05;

// ---------------------------------------------------------------------------
// Status enum
// ---------------------------------------------------------------------------

/// Outcome of validating a measured value against its tolerance band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementStatus {
    Pass,
    Warning,
    Fail,
}

impl MeasurementStatus {
    /// The string stored in the `measurements.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            MeasurementStatus::Pass => STATUS_PASS,
            MeasurementStatus::Warning => STATUS_WARNING,
            MeasurementStatus::Fail => STATUS_FAIL,
        }
    }

    /// Parse a stored status string. Returns `None` for anything unrecognised.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            STATUS_PASS => Some(MeasurementStatus::Pass),
            STATUS_WARNING => Some(MeasurementStatus::Warning),
            STATUS_FAIL => Some(MeasurementStatus::Fail),
            _ => None,
        }
    }
}

impl fmt::Display for MeasurementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Classify `value` against the tolerance band `[min, max]`.
///
/// - `Pass` if `min <= value <= max`
/// - `Warning` if `min * 0.95 <= value < min` or `max < value <= max * 1.05`
/// - `Fail` otherwise
///
/// Comparisons are exact, with no rounding. A `NaN` value fails every
/// comparison and therefore classifies as `Fail`. An inverted band
/// (`min > max`) has no valid reading and always classifies as `Fail`.
pub fn validate_measurement(value: f64, min: f64, max: f64) -> MeasurementStatus {
    if min > max {
        return MeasurementStatus::Fail;
    }

    if value >= min && value <= max {
        MeasurementStatus::Pass
    } else if (value < min && value >= min * LOWER_GRACE_FACTOR)
        || (value > max && value <= max * UPPER_GRACE_FACTOR)
    {
        MeasurementStatus::Warning
    } else {
        MeasurementStatus::Fail
    }
}

/// Reject non-finite measured values before they reach the database.
pub fn validate_measured_value(value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Measured value must be a finite number, got {value}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
