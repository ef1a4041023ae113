//! Handlers for recording and checking measurements.
//!
//! The status of a recorded measurement is always derived here from the
//! value and the parameter's band; clients cannot supply it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ceramqc_core::corrective_action::advise_action;
use ceramqc_core::error::CoreError;
use ceramqc_core::measurement::{validate_measured_value, validate_measurement, MeasurementStatus};
use ceramqc_core::types::DbId;
use ceramqc_db::models::measurement::{CreateMeasurement, Measurement, NewMeasurement};
use ceramqc_db::repositories::{MeasurementRepo, QualityParameterRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::batch::find_batch;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /measurements/validate`.
///
/// Either `parameter_id` names a catalogue parameter whose band is used, or
/// `min` and `max` give the band inline. `parameter` optionally names the
/// parameter for the recommendation when the band is inline.
#[derive(Debug, Deserialize)]
pub struct ValidateMeasurementRequest {
    pub parameter_id: Option<DbId>,
    pub parameter: Option<String>,
    pub value: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Outcome of a live measurement check.
#[derive(Debug, Serialize)]
pub struct ValidateMeasurementResponse {
    pub status: MeasurementStatus,
    pub min: f64,
    pub max: f64,
    /// Present only when the value did not pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<&'static str>,
}

/// POST /api/v1/batches/{id}/measurements
pub async fn create(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
    Json(input): Json<CreateMeasurement>,
) -> AppResult<(StatusCode, Json<Measurement>)> {
    input.validate()?;
    validate_measured_value(input.value)?;

    let batch = find_batch(&state.pool, &batch_id).await?;
    let parameter = QualityParameterRepo::find_by_id(&state.pool, input.parameter_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::not_found("QualityParameter", input.parameter_id))
        })?;

    let status = validate_measurement(input.value, parameter.min_value, parameter.max_value);
    let new = NewMeasurement {
        batch_id: batch.id,
        parameter_id: parameter.id,
        parameter: parameter.name,
        unit: parameter.unit,
        value: input.value,
        min: parameter.min_value,
        max: parameter.max_value,
        status: status.as_str(),
        measured_by: input.measured_by,
    };
    let measurement = MeasurementRepo::create(&state.pool, &new).await?;

    if status == MeasurementStatus::Fail {
        tracing::warn!(
            batch_id = %measurement.batch_id,
            parameter = %measurement.parameter,
            value = measurement.value,
            min = measurement.min,
            max = measurement.max,
            "Measurement out of tolerance"
        );
    } else {
        tracing::info!(
            id = measurement.id,
            batch_id = %measurement.batch_id,
            status = %status,
            "Measurement recorded"
        );
    }

    Ok((StatusCode::CREATED, Json(measurement)))
}

/// GET /api/v1/batches/{id}/measurements
pub async fn list_by_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Measurement>>>> {
    let batch = find_batch(&state.pool, &batch_id).await?;
    let measurements = MeasurementRepo::list_by_batch(&state.pool, &batch.id).await?;
    Ok(Json(DataResponse { data: measurements }))
}

/// GET /api/v1/measurements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Measurement>> {
    let measurement = MeasurementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Measurement", id)))?;
    Ok(Json(measurement))
}

/// POST /api/v1/measurements/validate
///
/// Classifies a value without storing anything, for form previews.
pub async fn validate(
    State(state): State<AppState>,
    Json(input): Json<ValidateMeasurementRequest>,
) -> AppResult<Json<ValidateMeasurementResponse>> {
    validate_measured_value(input.value)?;

    let (name, min, max) = match (input.parameter_id, input.min, input.max) {
        (Some(id), _, _) => {
            let p = QualityParameterRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or_else(|| AppError::Core(CoreError::not_found("QualityParameter", id)))?;
            (p.name, p.min_value, p.max_value)
        }
        (None, Some(min), Some(max)) => (input.parameter.unwrap_or_default(), min, max),
        _ => {
            return Err(AppError::BadRequest(
                "Provide either parameter_id or both min and max".to_string(),
            ))
        }
    };

    let status = validate_measurement(input.value, min, max);
    let recommendation =
        (status != MeasurementStatus::Pass).then(|| advise_action(&name, input.value, min, max));

    Ok(Json(ValidateMeasurementResponse {
        status,
        min,
        max,
        recommendation,
    }))
}
