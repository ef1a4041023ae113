use axum::routing::get;
use axum::Router;

use crate::handlers::report;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET    /             -> list (?limit, ?offset)
/// GET    /{id}         -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(report::list))
        .route("/{id}", get(report::get_by_id))
}
