//! Measurement model and DTOs.
//!
//! Clients submit a [`CreateMeasurement`]; the API resolves the parameter's
//! band, derives the status, and persists a [`NewMeasurement`].

use ceramqc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `measurements` table.
///
/// `parameter`, `unit`, `min` and `max` are copied from the catalogue when
/// the row is recorded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Measurement {
    pub id: DbId,
    pub batch_id: String,
    pub parameter_id: DbId,
    pub parameter: String,
    pub unit: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub status: String,
    pub date: Timestamp,
    pub measured_by: String,
}

/// Request body for recording a measurement.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMeasurement {
    pub parameter_id: DbId,
    pub value: f64,
    #[validate(length(min = 1, max = 200))]
    pub measured_by: String,
}

/// Fully resolved measurement ready for insertion.
#[derive(Debug, Clone)]
pub struct NewMeasurement {
    pub batch_id: String,
    pub parameter_id: DbId,
    pub parameter: String,
    pub unit: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub status: &'static str,
    pub measured_by: String,
}

/// A `(batch_id, status)` pair used for cross-batch compliance counts.
#[derive(Debug, Clone, FromRow)]
pub struct BatchMeasurementStatus {
    pub batch_id: String,
    pub status: String,
}
