//! Handlers for dashboard analytics.
//!
//! Aggregates are computed from stored rows on every request; nothing here
//! is cached or persisted.

use axum::extract::{Query, State};
use axum::Json;
use ceramqc_core::analytics::{
    average_passing_rate, batch_compliance_counts, defect_counts_by_type, performance_entry,
    quality_metric, quality_trends, DefectTypeCount, PerformanceEntry, QualityMetric, TrendPoint,
    TrendSample,
};
use ceramqc_core::batch::failure_rate;
use ceramqc_core::pagination::RECENT_BATCH_LIMIT;
use ceramqc_db::models::batch::Batch;
use ceramqc_db::models::dashboard::BatchStatusCount;
use ceramqc_db::repositories::{BatchRepo, DefectRepo, MeasurementRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::batch::find_batch;
use crate::query::{BatchScopeParams, TrendParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Headline numbers for the dashboard landing page.
#[derive(Debug, Serialize)]
pub struct DashboardOverview {
    pub total_batches: usize,
    pub batches_by_status: Vec<BatchStatusCount>,
    pub total_defects: i64,
    /// Mean of the batches' stored passing rates; `null` if none has one.
    pub average_passing_rate: Option<f64>,
    /// Batches with no failing measurement, including unmeasured ones.
    pub compliant_batches: usize,
    pub non_compliant_batches: usize,
    pub recent_batches: Vec<Batch>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/dashboard/overview
pub async fn overview(State(state): State<AppState>) -> AppResult<Json<DataResponse<DashboardOverview>>> {
    let batches = BatchRepo::list_by_date(&state.pool).await?;
    let batches_by_status = BatchRepo::count_by_status(&state.pool).await?;
    let total_defects = DefectRepo::count(&state.pool, None).await?;
    let recent_batches = BatchRepo::list_recent(&state.pool, RECENT_BATCH_LIMIT).await?;
    let rows = MeasurementRepo::list_batch_statuses(&state.pool).await?;

    let batch_ids: Vec<&str> = batches.iter().map(|b| b.id.as_str()).collect();
    let pairs: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.batch_id.as_str(), r.status.as_str()))
        .collect();
    let compliance = batch_compliance_counts(&batch_ids, &pairs);

    let rates: Vec<Option<f64>> = batches.iter().map(|b| b.passing_rate).collect();

    Ok(Json(DataResponse {
        data: DashboardOverview {
            total_batches: batches.len(),
            batches_by_status,
            total_defects,
            average_passing_rate: average_passing_rate(&rates),
            compliant_batches: compliance.compliant,
            non_compliant_batches: compliance.non_compliant,
            recent_batches,
        },
    }))
}

/// GET /api/v1/dashboard/defects-by-type
///
/// Counts every defect, or only those of `?batch_id=` when given.
pub async fn defects_by_type(
    State(state): State<AppState>,
    Query(params): Query<BatchScopeParams>,
) -> AppResult<Json<DataResponse<Vec<DefectTypeCount>>>> {
    let batch_id = match params.batch_id.as_deref() {
        Some(id) => Some(find_batch(&state.pool, id).await?.id),
        None => None,
    };
    let types = DefectRepo::list_types(&state.pool, batch_id.as_deref()).await?;
    let refs: Vec<&str> = types.iter().map(String::as_str).collect();
    Ok(Json(DataResponse {
        data: defect_counts_by_type(&refs),
    }))
}

/// GET /api/v1/dashboard/performance
pub async fn performance(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PerformanceEntry>>>> {
    let batches = BatchRepo::list_by_date(&state.pool).await?;
    let entries = batches
        .iter()
        .map(|b| performance_entry(&b.id, &b.name, b.passing_rate))
        .collect();
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/dashboard/metrics
///
/// Compares the most recent batch (by production date) with the one before
/// it. Empty when there are no batches.
pub async fn metrics(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<QualityMetric>>>> {
    let batches = BatchRepo::list_by_date(&state.pool).await?;
    let mut newest_first = batches.iter().rev();
    let Some(latest) = newest_first.next() else {
        return Ok(Json(DataResponse { data: Vec::new() }));
    };
    let previous = newest_first.next();

    let latest_defects = DefectRepo::count(&state.pool, Some(&latest.id)).await? as f64;
    let previous_defects = match previous {
        Some(b) => Some(DefectRepo::count(&state.pool, Some(&b.id)).await? as f64),
        None => None,
    };

    let metrics = vec![
        quality_metric(
            "Passing Rate",
            latest.passing_rate.unwrap_or(0.0),
            previous.map(|b| b.passing_rate.unwrap_or(0.0)),
            true,
            Some("%"),
        ),
        quality_metric(
            "Failure Rate",
            failure_rate(latest.passing_rate),
            previous.map(|b| failure_rate(b.passing_rate)),
            false,
            Some("%"),
        ),
        quality_metric("Defects", latest_defects, previous_defects, false, None),
    ];

    Ok(Json(DataResponse { data: metrics }))
}

/// GET /api/v1/dashboard/trends
///
/// Daily pass rate, defect rate and ISO compliance over `?range=` (`week`,
/// `month`, `quarter`, or monthly over a `year`). Defaults to `month`.
pub async fn trends(
    State(state): State<AppState>,
    Query(params): Query<TrendParams>,
) -> AppResult<Json<DataResponse<Vec<TrendPoint>>>> {
    let today = chrono::Utc::now().date_naive();
    let rows = MeasurementRepo::list_days_since(&state.pool, params.range.start(today)).await?;
    let samples: Vec<TrendSample<'_>> = rows
        .iter()
        .map(|r| TrendSample {
            day: r.day,
            batch_id: &r.batch_id,
            status: &r.status,
        })
        .collect();
    Ok(Json(DataResponse {
        data: quality_trends(params.range, today, &samples),
    }))
}
