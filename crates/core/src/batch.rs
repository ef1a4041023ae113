//! Production batch status constants, validation, and passing-rate helpers.

use crate::compliance::ComplianceSummary;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Batch status constants (match the `batch_status` column check)
// ---------------------------------------------------------------------------

/// Batch registered, no inspection started.
pub const BATCH_STATUS_PENDING: &str = "pending";
/// Inspection underway.
pub const BATCH_STATUS_IN_PROGRESS: &str = "inProgress";
/// Inspection finished and the lot released.
pub const BATCH_STATUS_COMPLETED: &str = "completed";
/// Lot rejected.
pub const BATCH_STATUS_FAILED: &str = "failed";

/// All valid batch status strings.
pub const VALID_BATCH_STATUSES: &[&str] = &[
    BATCH_STATUS_PENDING,
    BATCH_STATUS_IN_PROGRESS,
    BATCH_STATUS_COMPLETED,
    BATCH_STATUS_FAILED,
];

/// Maximum length of a batch lot code.
pub const MAX_BATCH_ID_LEN: usize = 64;

/// Validate that a batch status string is one of the known statuses.
pub fn validate_batch_status(status: &str) -> Result<(), CoreError> {
    if VALID_BATCH_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown batch status: '{status}'. Valid statuses: {}",
            VALID_BATCH_STATUSES.join(", ")
        )))
    }
}

/// Validate a client-supplied batch lot code (e.g. `B-2024-001`).
///
/// Must be non-empty, at most [`MAX_BATCH_ID_LEN`] characters, and contain
/// only ASCII alphanumerics, `-` and `_` so it is safe to embed in paths.
pub fn validate_batch_id(id: &str) -> Result<(), CoreError> {
    if id.is_empty() {
        return Err(CoreError::Validation("Batch id must not be empty".into()));
    }
    if id.len() > MAX_BATCH_ID_LEN {
        return Err(CoreError::Validation(format!(
            "Batch id must be at most {MAX_BATCH_ID_LEN} characters"
        )));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CoreError::Validation(format!(
            "Batch id '{id}' may only contain letters, digits, '-' and '_'"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Passing rate
// ---------------------------------------------------------------------------

/// Validate a passing rate percentage: finite and within `[0, 100]`.
pub fn validate_passing_rate(rate: f64) -> Result<(), CoreError> {
    if !rate.is_finite() || !(0.0..=100.0).contains(&rate) {
        return Err(CoreError::Validation(format!(
            "passing_rate must be between 0 and 100, got {rate}"
        )));
    }
    Ok(())
}

/// Derive a passing rate from a compliance summary.
///
/// Only `pass` counts as passing; warnings do not. The result is a
/// percentage rounded to one decimal place, or `None` when the batch has no
/// measurements yet.
pub fn passing_rate(summary: &ComplianceSummary) -> Option<f64> {
    if summary.total_measurements == 0 {
        return None;
    }
    let rate = summary.pass_count as f64 / summary.total_measurements as f64 * 100.0;
    Some((rate * 10.0).round() / 10.0)
}

/// The complement of a passing rate, treating an unknown rate as zero.
pub fn failure_rate(passing_rate: Option<f64>) -> f64 {
    100.0 - passing_rate.unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
