//! Repository for the `measurements` table.

use ceramqc_core::measurement::STATUS_FAIL;
use ceramqc_core::types::{Date, DbId};
use sqlx::PgPool;

use crate::models::dashboard::MeasurementDay;
use crate::models::measurement::{BatchMeasurementStatus, Measurement, NewMeasurement};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, batch_id, parameter_id, parameter, unit, value, min, max, status, date, measured_by";

/// Provides access to recorded measurements.
pub struct MeasurementRepo;

impl MeasurementRepo {
    /// Insert a measurement, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewMeasurement) -> Result<Measurement, sqlx::Error> {
        let query = format!(
            "INSERT INTO measurements
                (batch_id, parameter_id, parameter, unit, value, min, max, status, measured_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Measurement>(&query)
            .bind(&input.batch_id)
            .bind(input.parameter_id)
            .bind(&input.parameter)
            .bind(&input.unit)
            .bind(input.value)
            .bind(input.min)
            .bind(input.max)
            .bind(input.status)
            .bind(&input.measured_by)
            .fetch_one(pool)
            .await
    }

    /// Find a measurement by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Measurement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM measurements WHERE id = $1");
        sqlx::query_as::<_, Measurement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All measurements for a batch, oldest first.
    pub async fn list_by_batch(
        pool: &PgPool,
        batch_id: &str,
    ) -> Result<Vec<Measurement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM measurements
             WHERE batch_id = $1
             ORDER BY date ASC, id ASC"
        );
        sqlx::query_as::<_, Measurement>(&query)
            .bind(batch_id)
            .fetch_all(pool)
            .await
    }

    /// Failing measurements for a batch, oldest first.
    pub async fn list_failing_by_batch(
        pool: &PgPool,
        batch_id: &str,
    ) -> Result<Vec<Measurement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM measurements
             WHERE batch_id = $1 AND status = $2
             ORDER BY date ASC, id ASC"
        );
        sqlx::query_as::<_, Measurement>(&query)
            .bind(batch_id)
            .bind(STATUS_FAIL)
            .fetch_all(pool)
            .await
    }

    /// Stored statuses of every measurement in a batch.
    pub async fn list_statuses_by_batch(
        pool: &PgPool,
        batch_id: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT status FROM measurements WHERE batch_id = $1")
            .bind(batch_id)
            .fetch_all(pool)
            .await
    }

    /// `(batch_id, status)` for every measurement across all batches.
    pub async fn list_batch_statuses(
        pool: &PgPool,
    ) -> Result<Vec<BatchMeasurementStatus>, sqlx::Error> {
        sqlx::query_as::<_, BatchMeasurementStatus>(
            "SELECT batch_id, status FROM measurements ORDER BY batch_id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Measurements recorded on or after `since` (UTC day), oldest first.
    pub async fn list_days_since(
        pool: &PgPool,
        since: Date,
    ) -> Result<Vec<MeasurementDay>, sqlx::Error> {
        sqlx::query_as::<_, MeasurementDay>(
            "SELECT batch_id, status, (date AT TIME ZONE 'UTC')::DATE AS day
             FROM measurements
             WHERE (date AT TIME ZONE 'UTC')::DATE >= $1
             ORDER BY date ASC, id ASC",
        )
        .bind(since)
        .fetch_all(pool)
        .await
    }
}
