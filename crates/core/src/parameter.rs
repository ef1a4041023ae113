//! Quality parameter categories and tolerance band validation.

use crate::error::CoreError;

pub const CATEGORY_DIMENSIONAL: &str = "dimensional";
pub const CATEGORY_VISUAL: &str = "visual";
pub const CATEGORY_PHYSICAL: &str = "physical";
pub const CATEGORY_OTHER: &str = "other";

/// All valid parameter categories.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_DIMENSIONAL,
    CATEGORY_VISUAL,
    CATEGORY_PHYSICAL,
    CATEGORY_OTHER,
];

pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown parameter category: '{category}'. Valid categories: {}",
            VALID_CATEGORIES.join(", ")
        )))
    }
}

/// Validate an ISO tolerance band.
///
/// Both bounds must be finite and `min <= max`. Parameters are the only
/// source of bands for recorded measurements, so an inverted band can
/// never reach the validator through the API.
pub fn validate_tolerance_band(min: f64, max: f64) -> Result<(), CoreError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(CoreError::Validation(format!(
            "Tolerance bounds must be finite, got [{min}, {max}]"
        )));
    }
    if min > max {
        return Err(CoreError::Validation(format!(
            "min_value ({min}) must be <= max_value ({max})"
        )));
    }
    Ok(())
}
