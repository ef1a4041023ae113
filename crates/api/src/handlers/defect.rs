//! Handlers for visual defect reports.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ceramqc_core::defect::{validate_defect_type, validate_description, validate_severity};
use ceramqc_core::error::CoreError;
use ceramqc_core::types::DbId;
use ceramqc_db::models::defect::{CreateDefect, Defect, DefectListParams};
use ceramqc_db::repositories::DefectRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::batch::find_batch;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/batches/{id}/defects
pub async fn create(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
    Json(input): Json<CreateDefect>,
) -> AppResult<(StatusCode, Json<Defect>)> {
    input.validate()?;
    validate_defect_type(&input.defect_type)?;
    validate_severity(&input.severity)?;
    validate_description(&input.description)?;

    let batch = find_batch(&state.pool, &batch_id).await?;
    let defect = DefectRepo::create(&state.pool, &batch.id, &input).await?;
    tracing::info!(
        id = defect.id,
        batch_id = %defect.batch_id,
        defect_type = %defect.defect_type,
        severity = %defect.severity,
        "Defect reported"
    );
    Ok((StatusCode::CREATED, Json(defect)))
}

/// GET /api/v1/batches/{id}/defects
pub async fn list_by_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Defect>>>> {
    let batch = find_batch(&state.pool, &batch_id).await?;
    let defects = DefectRepo::list_by_batch(&state.pool, &batch.id).await?;
    Ok(Json(DataResponse { data: defects }))
}

/// GET /api/v1/defects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<DefectListParams>,
) -> AppResult<Json<DataResponse<Vec<Defect>>>> {
    if let Some(defect_type) = &params.defect_type {
        validate_defect_type(defect_type)?;
    }
    let defects = DefectRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: defects }))
}

/// GET /api/v1/defects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Defect>> {
    let defect = DefectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Defect", id)))?;
    Ok(Json(defect))
}
