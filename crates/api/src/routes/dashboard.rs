//! Route definitions for dashboard analytics.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET    /overview           -> overview
/// GET    /defects-by-type    -> defects_by_type (?batch_id)
/// GET    /performance        -> performance
/// GET    /metrics            -> metrics
/// GET    /trends             -> trends (?range)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(dashboard::overview))
        .route("/defects-by-type", get(dashboard::defects_by_type))
        .route("/performance", get(dashboard::performance))
        .route("/metrics", get(dashboard::metrics))
        .route("/trends", get(dashboard::trends))
}
