//! Defect type and severity constants with input validation.

use crate::error::CoreError;

pub const DEFECT_CRACK: &str = "crack";
pub const DEFECT_CHIP: &str = "chip";
pub const DEFECT_COLOR_DEVIATION: &str = "colorDeviation";
pub const DEFECT_GLAZE_DEFECT: &str = "glazeDefect";
pub const DEFECT_OTHER: &str = "other";

/// All valid defect types, in display order.
pub const VALID_DEFECT_TYPES: &[&str] = &[
    DEFECT_CRACK,
    DEFECT_CHIP,
    DEFECT_COLOR_DEVIATION,
    DEFECT_GLAZE_DEFECT,
    DEFECT_OTHER,
];

pub const SEVERITY_LOW: &str = "low";
pub const SEVERITY_MEDIUM: &str = "medium";
pub const SEVERITY_HIGH: &str = "high";

/// All valid severities, lowest first.
pub const VALID_SEVERITIES: &[&str] = &[SEVERITY_LOW, SEVERITY_MEDIUM, SEVERITY_HIGH];

/// Maximum length of a defect description.
pub const MAX_DESCRIPTION_LEN: usize = 2000;

pub fn validate_defect_type(defect_type: &str) -> Result<(), CoreError> {
    if VALID_DEFECT_TYPES.contains(&defect_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown defect type: '{defect_type}'. Valid types: {}",
            VALID_DEFECT_TYPES.join(", ")
        )))
    }
}

pub fn validate_severity(severity: &str) -> Result<(), CoreError> {
    if VALID_SEVERITIES.contains(&severity) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown severity: '{severity}'. Valid severities: {}",
            VALID_SEVERITIES.join(", ")
        )))
    }
}

/// Validate a free-text description: non-blank and bounded in length.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation(
            "Defect description must not be empty".into(),
        ));
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Defect description must be at most {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

/// Human-readable label for a camelCase defect type (`colorDeviation` ->
/// `Color Deviation`).
pub fn defect_type_label(defect_type: &str) -> String {
    let mut label = String::with_capacity(defect_type.len() + 4);
    for (i, c) in defect_type.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label
}
