//! Read-only aggregate rows for the dashboard.

use ceramqc_core::types::Date;
use serde::Serialize;
use sqlx::FromRow;

/// Number of batches in one status.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BatchStatusCount {
    pub status: String,
    pub count: i64,
}

/// A measurement's batch and status with the UTC day it was recorded.
#[derive(Debug, Clone, FromRow)]
pub struct MeasurementDay {
    pub batch_id: String,
    pub status: String,
    pub day: Date,
}
