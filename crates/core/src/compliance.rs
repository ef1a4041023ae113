//! ISO compliance aggregation over a batch's measurements.
//!
//! The summary is derived on every read and never persisted. It counts the
//! status stored on each measurement as-is; because measurement rows are
//! written with a status derived from their own value and band, the stored
//! status and a recomputation always agree for rows created by this system.

use serde::Serialize;

use crate::measurement::MeasurementStatus;

/// Aggregated compliance counts for a set of measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceSummary {
    /// `true` iff no measurement failed. Warnings alone keep a batch compliant.
    pub is_compliant: bool,
    pub pass_count: usize,
    pub warning_count: usize,
    pub non_compliant_count: usize,
    /// Number of statuses inspected, including any unrecognised ones.
    pub total_measurements: usize,
}

/// Summarize a slice of stored measurement status strings.
///
/// Unrecognised statuses are excluded from all three counts without error.
pub fn summarize(statuses: &[&str]) -> ComplianceSummary {
    let mut pass_count = 0usize;
    let mut warning_count = 0usize;
    let mut non_compliant_count = 0usize;

    for &s in statuses {
        match MeasurementStatus::parse(s) {
            Some(MeasurementStatus::Pass) => pass_count += 1,
            Some(MeasurementStatus::Warning) => warning_count += 1,
            Some(MeasurementStatus::Fail) => non_compliant_count += 1,
            None => {}
        }
    }

    ComplianceSummary {
        is_compliant: non_compliant_count == 0,
        pass_count,
        warning_count,
        non_compliant_count,
        total_measurements: statuses.len(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
