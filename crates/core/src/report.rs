//! Compliance report types, formats, and summary text.
//!
//! A report is a persisted record of a compliance evaluation at a point in
//! time. No document is rendered here; `format` only records what the
//! requester asked for.

use crate::compliance::ComplianceSummary;
use crate::error::CoreError;

pub const REPORT_TYPE_FULL: &str = "full";
pub const REPORT_TYPE_ISO: &str = "iso";
pub const REPORT_TYPE_DEFECTS: &str = "defects";
pub const REPORT_TYPE_SUMMARY: &str = "summary";

pub const VALID_REPORT_TYPES: &[&str] = &[
    REPORT_TYPE_FULL,
    REPORT_TYPE_ISO,
    REPORT_TYPE_DEFECTS,
    REPORT_TYPE_SUMMARY,
];

pub const FORMAT_PDF: &str = "pdf";
pub const FORMAT_EXCEL: &str = "excel";
pub const FORMAT_CSV: &str = "csv";

pub const VALID_FORMATS: &[&str] = &[FORMAT_PDF, FORMAT_EXCEL, FORMAT_CSV];

/// Format used when the request does not name one.
pub const DEFAULT_FORMAT: &str = FORMAT_PDF;

pub fn validate_report_type(report_type: &str) -> Result<(), CoreError> {
    if VALID_REPORT_TYPES.contains(&report_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown report type: '{report_type}'. Valid types: {}",
            VALID_REPORT_TYPES.join(", ")
        )))
    }
}

pub fn validate_format(format: &str) -> Result<(), CoreError> {
    if VALID_FORMATS.contains(&format) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown report format: '{format}'. Valid formats: {}",
            VALID_FORMATS.join(", ")
        )))
    }
}

/// Default title for a report of `report_type` on `batch_name`.
pub fn default_title(report_type: &str, batch_name: &str) -> String {
    let kind = match report_type {
        REPORT_TYPE_FULL => "Full Quality Report",
        REPORT_TYPE_ISO => "ISO Compliance Report",
        REPORT_TYPE_DEFECTS => "Visual Defects Report",
        REPORT_TYPE_SUMMARY => "Executive Summary",
        _ => "Quality Report",
    };
    format!("{kind} - {batch_name}")
}

/// One-paragraph summary of a compliance evaluation.
pub fn build_summary(summary: &ComplianceSummary, defect_count: usize) -> String {
    let verdict = if summary.is_compliant {
        "Batch meets ISO requirements."
    } else {
        "Batch does not meet ISO requirements. Corrective action required."
    };
    format!(
        "{verdict} {} measurement(s): {} pass, {} warning, {} fail. {defect_count} defect(s) reported.",
        summary.total_measurements,
        summary.pass_count,
        summary.warning_count,
        summary.non_compliant_count,
    )
}
