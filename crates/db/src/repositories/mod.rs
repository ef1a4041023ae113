//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod batch_repo;
pub mod defect_repo;
pub mod measurement_repo;
pub mod profile_repo;
pub mod quality_parameter_repo;
pub mod report_repo;

pub use batch_repo::BatchRepo;
pub use defect_repo::DefectRepo;
pub use measurement_repo::MeasurementRepo;
pub use profile_repo::ProfileRepo;
pub use quality_parameter_repo::QualityParameterRepo;
pub use report_repo::ReportRepo;

/// Build an `ILIKE` pattern matching `search` anywhere in a column.
///
/// Blank input yields `None` so the filter is skipped.
pub(crate) fn contains_pattern(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("%{}%", escape_like(s)))
}

/// Escape `LIKE` metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
