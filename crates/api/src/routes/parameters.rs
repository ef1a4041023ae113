//! Route definitions for the ISO parameter catalogue.

use axum::routing::get;
use axum::Router;

use crate::handlers::parameter;
use crate::state::AppState;

/// Routes mounted at `/parameters`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// GET    /{id}         -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(parameter::list).post(parameter::create))
        .route("/{id}", get(parameter::get_by_id))
}
