//! Route definitions for the `/defects` gallery.

use axum::routing::get;
use axum::Router;

use crate::handlers::defect;
use crate::state::AppState;

/// Routes mounted at `/defects`.
///
/// ```text
/// GET    /             -> list (?batch_id, ?type, ?limit, ?offset)
/// GET    /{id}         -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(defect::list))
        .route("/{id}", get(defect::get_by_id))
}
