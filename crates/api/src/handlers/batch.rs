//! Handlers for the `/batches` resource and its derived views.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ceramqc_core::batch::{
    passing_rate, validate_batch_id, validate_batch_status, validate_passing_rate,
};
use ceramqc_core::compliance::{summarize, ComplianceSummary};
use ceramqc_core::corrective_action::advise_action;
use ceramqc_core::error::CoreError;
use ceramqc_core::pagination::RECENT_BATCH_LIMIT;
use ceramqc_core::types::DbId;
use ceramqc_db::models::batch::{Batch, BatchListParams, CreateBatch, UpdateBatch};
use ceramqc_db::models::defect::Defect;
use ceramqc_db::models::measurement::Measurement;
use ceramqc_db::repositories::{BatchRepo, DefectRepo, MeasurementRepo};
use ceramqc_db::DbPool;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Compliance summary for one batch.
#[derive(Debug, Serialize)]
pub struct BatchCompliance {
    pub batch_id: String,
    #[serde(flatten)]
    pub summary: ComplianceSummary,
}

/// A failing measurement paired with its recommended remedy.
#[derive(Debug, Serialize)]
pub struct CorrectiveAction {
    pub measurement_id: DbId,
    pub parameter: String,
    pub value: f64,
    pub unit: String,
    pub min: f64,
    pub max: f64,
    pub recommendation: &'static str,
}

/// Everything the batch detail page shows.
#[derive(Debug, Serialize)]
pub struct BatchDetail {
    pub batch: Batch,
    pub measurements: Vec<Measurement>,
    pub defects: Vec<Defect>,
    pub compliance: ComplianceSummary,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a batch or fail with 404.
pub(crate) async fn find_batch(pool: &DbPool, id: &str) -> AppResult<Batch> {
    BatchRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Batch", id)))
}

/// Compliance summary over a batch's stored measurement statuses.
pub(crate) async fn batch_compliance(pool: &DbPool, batch_id: &str) -> AppResult<ComplianceSummary> {
    let statuses = MeasurementRepo::list_statuses_by_batch(pool, batch_id).await?;
    let refs: Vec<&str> = statuses.iter().map(String::as_str).collect();
    Ok(summarize(&refs))
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/batches
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBatch>,
) -> AppResult<(StatusCode, Json<Batch>)> {
    input.validate()?;
    validate_batch_id(&input.id)?;
    if let Some(status) = &input.status {
        validate_batch_status(status)?;
    }
    if BatchRepo::exists(&state.pool, &input.id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Batch '{}' already exists",
            input.id
        ))));
    }

    let batch = BatchRepo::create(&state.pool, &input).await?;
    tracing::info!(batch_id = %batch.id, name = %batch.name, kiln = %batch.kiln, "Batch created");
    Ok((StatusCode::CREATED, Json(batch)))
}

/// GET /api/v1/batches
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<BatchListParams>,
) -> AppResult<Json<DataResponse<Vec<Batch>>>> {
    if let Some(status) = &params.status {
        validate_batch_status(status)?;
    }
    let batches = BatchRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: batches }))
}

/// GET /api/v1/batches/recent
pub async fn recent(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Batch>>>> {
    let batches = BatchRepo::list_recent(&state.pool, RECENT_BATCH_LIMIT).await?;
    Ok(Json(DataResponse { data: batches }))
}

/// GET /api/v1/batches/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Batch>> {
    let batch = find_batch(&state.pool, &id).await?;
    Ok(Json(batch))
}

/// PUT /api/v1/batches/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateBatch>,
) -> AppResult<Json<Batch>> {
    input.validate()?;
    if let Some(status) = &input.status {
        validate_batch_status(status)?;
    }
    if let Some(rate) = input.passing_rate {
        validate_passing_rate(rate)?;
    }

    let batch = BatchRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Batch", &id)))?;
    tracing::info!(batch_id = %batch.id, status = %batch.status, "Batch updated");
    Ok(Json(batch))
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// GET /api/v1/batches/{id}/compliance
///
/// Recomputed from the batch's current measurements on every call.
pub async fn compliance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BatchCompliance>> {
    let batch = find_batch(&state.pool, &id).await?;
    let summary = batch_compliance(&state.pool, &batch.id).await?;
    Ok(Json(BatchCompliance {
        batch_id: batch.id,
        summary,
    }))
}

/// GET /api/v1/batches/{id}/corrective-actions
pub async fn corrective_actions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<CorrectiveAction>>>> {
    let batch = find_batch(&state.pool, &id).await?;
    let failing = MeasurementRepo::list_failing_by_batch(&state.pool, &batch.id).await?;

    let actions = failing
        .into_iter()
        .map(|m| CorrectiveAction {
            recommendation: advise_action(&m.parameter, m.value, m.min, m.max),
            measurement_id: m.id,
            parameter: m.parameter,
            value: m.value,
            unit: m.unit,
            min: m.min,
            max: m.max,
        })
        .collect();

    Ok(Json(DataResponse { data: actions }))
}

/// GET /api/v1/batches/{id}/detail
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BatchDetail>> {
    let batch = find_batch(&state.pool, &id).await?;
    let measurements = MeasurementRepo::list_by_batch(&state.pool, &batch.id).await?;
    let defects = DefectRepo::list_by_batch(&state.pool, &batch.id).await?;

    let statuses: Vec<&str> = measurements.iter().map(|m| m.status.as_str()).collect();
    let compliance = summarize(&statuses);

    Ok(Json(BatchDetail {
        batch,
        measurements,
        defects,
        compliance,
    }))
}

/// POST /api/v1/batches/{id}/passing-rate/recompute
///
/// Derives the passing rate from the batch's measurements and stores it.
/// A batch without measurements has its rate cleared.
pub async fn recompute_passing_rate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Batch>> {
    let batch = find_batch(&state.pool, &id).await?;
    let summary = batch_compliance(&state.pool, &batch.id).await?;
    let rate = passing_rate(&summary);

    let batch = BatchRepo::set_passing_rate(&state.pool, &batch.id, rate)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Batch", &id)))?;
    tracing::info!(batch_id = %batch.id, passing_rate = ?rate, "Passing rate recomputed");
    Ok(Json(batch))
}
