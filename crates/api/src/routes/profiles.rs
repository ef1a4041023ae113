use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profiles`. Read-only.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::list))
        .route("/{id}", get(profile::get_by_id))
}
