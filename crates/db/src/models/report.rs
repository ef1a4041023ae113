//! Compliance report model and DTOs.

use ceramqc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    pub batch_id: String,
    pub title: String,
    pub report_type: String,
    pub format: String,
    pub date: Timestamp,
    pub is_compliant: bool,
    pub summary: String,
    pub generated_by: String,
}

/// Request body for generating a report on a batch.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReport {
    pub report_type: String,
    /// Defaults to `pdf`.
    pub format: Option<String>,
    /// Defaults to a title derived from the report type and batch name.
    #[validate(length(min = 1, max = 300))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub generated_by: String,
}

/// Fully resolved report ready for insertion.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub batch_id: String,
    pub title: String,
    pub report_type: String,
    pub format: String,
    pub is_compliant: bool,
    pub summary: String,
    pub generated_by: String,
}

/// Query parameters for `GET /reports`.
#[derive(Debug, Deserialize)]
pub struct ReportListParams {
    /// Case-insensitive substring match on title or batch id.
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
