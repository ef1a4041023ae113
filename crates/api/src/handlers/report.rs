//! Handlers for compliance reports.
//!
//! Generating a report evaluates the batch's current measurements and
//! persists the verdict with a summary sentence. No document is rendered.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ceramqc_core::error::CoreError;
use ceramqc_core::report::{
    build_summary, default_title, validate_format, validate_report_type, DEFAULT_FORMAT,
};
use ceramqc_core::types::DbId;
use ceramqc_db::models::report::{CreateReport, NewReport, Report, ReportListParams};
use ceramqc_db::repositories::{DefectRepo, ReportRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::batch::{batch_compliance, find_batch};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/batches/{id}/reports
pub async fn create(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
    Json(input): Json<CreateReport>,
) -> AppResult<(StatusCode, Json<Report>)> {
    input.validate()?;
    validate_report_type(&input.report_type)?;
    let format = input.format.unwrap_or_else(|| DEFAULT_FORMAT.to_string());
    validate_format(&format)?;

    let batch = find_batch(&state.pool, &batch_id).await?;
    let compliance = batch_compliance(&state.pool, &batch.id).await?;
    let defect_count = DefectRepo::count(&state.pool, Some(&batch.id)).await?;

    let new = NewReport {
        title: input
            .title
            .unwrap_or_else(|| default_title(&input.report_type, &batch.name)),
        summary: build_summary(&compliance, usize::try_from(defect_count).unwrap_or(0)),
        batch_id: batch.id,
        report_type: input.report_type,
        format,
        is_compliant: compliance.is_compliant,
        generated_by: input.generated_by,
    };
    let report = ReportRepo::create(&state.pool, &new).await?;

    if report.is_compliant {
        tracing::info!(id = report.id, batch_id = %report.batch_id, "Compliance report generated");
    } else {
        tracing::warn!(
            id = report.id,
            batch_id = %report.batch_id,
            non_compliant = compliance.non_compliant_count,
            "Batch is not ISO compliant"
        );
    }

    Ok((StatusCode::CREATED, Json(report)))
}

/// GET /api/v1/batches/{id}/reports
pub async fn list_by_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Report>>>> {
    let batch = find_batch(&state.pool, &batch_id).await?;
    let reports = ReportRepo::list_by_batch(&state.pool, &batch.id).await?;
    Ok(Json(DataResponse { data: reports }))
}

/// GET /api/v1/reports
///
/// `?search=` matches the title or batch id, ignoring case.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ReportListParams>,
) -> AppResult<Json<DataResponse<Vec<Report>>>> {
    let reports = ReportRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: reports }))
}

/// GET /api/v1/reports/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Report>> {
    let report = ReportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Report", id)))?;
    Ok(Json(report))
}
