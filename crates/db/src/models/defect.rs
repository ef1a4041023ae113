//! Defect model and DTOs.

use ceramqc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `defects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Defect {
    pub id: DbId,
    pub batch_id: String,
    #[serde(rename = "type")]
    pub defect_type: String,
    pub severity: String,
    pub description: String,
    pub image_url: Option<String>,
    pub date: Timestamp,
    pub reported_by: String,
}

/// Request body for reporting a defect against a batch.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDefect {
    #[serde(rename = "type")]
    pub defect_type: String,
    pub severity: String,
    pub description: String,
    #[validate(url)]
    pub image_url: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub reported_by: String,
}

/// Query parameters for the defect gallery (`GET /defects`).
#[derive(Debug, Deserialize)]
pub struct DefectListParams {
    pub batch_id: Option<String>,
    #[serde(rename = "type")]
    pub defect_type: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
