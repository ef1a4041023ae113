pub mod batches;
pub mod dashboard;
pub mod defects;
pub mod health;
pub mod measurements;
pub mod parameters;
pub mod profiles;
pub mod reports;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /settings                                  server-side defaults (GET)
///
/// /profiles                                  list (?role)
/// /profiles/{id}                             get
///
/// /parameters                                list, create
/// /parameters/{id}                           get
///
/// /batches                                   list (?search, ?status), create
/// /batches/recent                            newest batches
/// /batches/{id}                              get, update
/// /batches/{id}/detail                       batch + measurements + defects + compliance
/// /batches/{id}/compliance                   ISO compliance summary
/// /batches/{id}/corrective-actions           advice for failing measurements
/// /batches/{id}/passing-rate/recompute       derive and store passing rate (POST)
/// /batches/{id}/measurements                 list, record
/// /batches/{id}/defects                      list, report
/// /batches/{id}/reports                      list, generate
///
/// /measurements/validate                     live status check (POST)
/// /measurements/{id}                         get
///
/// /defects                                   gallery (?batch_id, ?type)
/// /defects/{id}                              get
///
/// /reports                                   list
/// /reports/{id}                              get
///
/// /dashboard/overview                        headline counts
/// /dashboard/defects-by-type                 defect distribution (?batch_id)
/// /dashboard/performance                     passing/failure rate per batch
/// /dashboard/metrics                         latest-vs-previous batch trends
/// /dashboard/trends                          quality over time (?range)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/settings", settings::router())
        .nest("/profiles", profiles::router())
        .nest("/parameters", parameters::router())
        .nest("/batches", batches::router())
        .nest("/measurements", measurements::router())
        .nest("/defects", defects::router())
        .nest("/reports", reports::router())
        .nest("/dashboard", dashboard::router())
}
