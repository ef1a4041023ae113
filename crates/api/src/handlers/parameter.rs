//! Handlers for the ISO quality parameter catalogue.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ceramqc_core::error::CoreError;
use ceramqc_core::parameter::{validate_category, validate_tolerance_band};
use ceramqc_core::types::DbId;
use ceramqc_db::models::quality_parameter::{CreateQualityParameter, QualityParameter};
use ceramqc_db::repositories::QualityParameterRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/parameters
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateQualityParameter>,
) -> AppResult<(StatusCode, Json<QualityParameter>)> {
    input.validate()?;
    validate_category(&input.category)?;
    validate_tolerance_band(input.min_value, input.max_value)?;

    let parameter = QualityParameterRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = parameter.id,
        name = %parameter.name,
        min = parameter.min_value,
        max = parameter.max_value,
        "Quality parameter created"
    );
    Ok((StatusCode::CREATED, Json(parameter)))
}

/// GET /api/v1/parameters
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<QualityParameter>>>> {
    let parameters = QualityParameterRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: parameters }))
}

/// GET /api/v1/parameters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<QualityParameter>> {
    let parameter = QualityParameterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("QualityParameter", id)))?;
    Ok(Json(parameter))
}
