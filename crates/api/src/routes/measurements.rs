//! Route definitions for the `/measurements` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::measurement;
use crate::state::AppState;

/// Routes mounted at `/measurements`.
///
/// ```text
/// POST   /validate     -> validate
/// GET    /{id}         -> get_by_id
/// ```
///
/// Recording happens under `/batches/{id}/measurements`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validate", post(measurement::validate))
        .route("/{id}", get(measurement::get_by_id))
}
