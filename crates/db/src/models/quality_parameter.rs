//! ISO quality parameter model and DTOs.

use ceramqc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `quality_parameters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QualityParameter {
    pub id: DbId,
    pub name: String,
    pub iso_code: String,
    pub description: Option<String>,
    pub unit: String,
    pub min_value: f64,
    pub max_value: f64,
    pub category: String,
    pub created_at: Timestamp,
}

/// DTO for adding a parameter to the catalogue.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQualityParameter {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub iso_code: String,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub unit: String,
    pub min_value: f64,
    pub max_value: f64,
    pub category: String,
}
