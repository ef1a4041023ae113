//! Production batch model and DTOs.

use ceramqc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A batch row from the `batches` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Batch {
    pub id: String,
    pub name: String,
    pub date: Timestamp,
    pub kiln: String,
    pub material_lot: String,
    pub status: String,
    pub created_by: String,
    pub passing_rate: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new batch.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBatch {
    #[validate(length(min = 1, max = 64))]
    pub id: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub kiln: String,
    #[validate(length(min = 1, max = 100))]
    pub material_lot: String,
    #[validate(length(min = 1, max = 200))]
    pub created_by: String,
    /// Defaults to `pending` if omitted.
    pub status: Option<String>,
    /// Production date; defaults to now.
    pub date: Option<Timestamp>,
}

/// DTO for updating an existing batch. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBatch {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub kiln: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub material_lot: Option<String>,
    pub status: Option<String>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub passing_rate: Option<f64>,
}

/// Query parameters for `GET /batches`.
#[derive(Debug, Deserialize)]
pub struct BatchListParams {
    /// Case-insensitive substring match on id or name.
    pub search: Option<String>,
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
