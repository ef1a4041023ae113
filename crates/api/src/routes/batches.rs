//! Route definitions for the `/batches` resource.
//!
//! Measurement, defect and report routes scoped to a batch are nested under
//! `/batches/{id}/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{batch, defect, measurement, report};
use crate::state::AppState;

/// Routes mounted at `/batches`.
///
/// ```text
/// GET    /                                   -> list
/// POST   /                                   -> create
/// GET    /recent                             -> recent
/// GET    /{id}                               -> get_by_id
/// PUT    /{id}                               -> update
/// GET    /{id}/detail                        -> detail
/// GET    /{id}/compliance                    -> compliance
/// GET    /{id}/corrective-actions            -> corrective_actions
/// POST   /{id}/passing-rate/recompute        -> recompute_passing_rate
///
/// GET    /{id}/measurements                  -> measurement::list_by_batch
/// POST   /{id}/measurements                  -> measurement::create
/// GET    /{id}/defects                       -> defect::list_by_batch
/// POST   /{id}/defects                       -> defect::create
/// GET    /{id}/reports                       -> report::list_by_batch
/// POST   /{id}/reports                       -> report::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(batch::list).post(batch::create))
        .route("/recent", get(batch::recent))
        .route("/{id}", get(batch::get_by_id).put(batch::update))
        .route("/{id}/detail", get(batch::detail))
        .route("/{id}/compliance", get(batch::compliance))
        .route("/{id}/corrective-actions", get(batch::corrective_actions))
        .route(
            "/{id}/passing-rate/recompute",
            post(batch::recompute_passing_rate),
        )
        .route(
            "/{id}/measurements",
            get(measurement::list_by_batch).post(measurement::create),
        )
        .route(
            "/{id}/defects",
            get(defect::list_by_batch).post(defect::create),
        )
        .route(
            "/{id}/reports",
            get(report::list_by_batch).post(report::create),
        )
}
