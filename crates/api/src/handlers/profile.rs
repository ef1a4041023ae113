//! Handlers for the read-only staff directory.

use axum::extract::{Path, Query, State};
use axum::Json;
use ceramqc_core::error::CoreError;
use ceramqc_core::roles::validate_role;
use ceramqc_core::types::DbId;
use ceramqc_db::models::profile::Profile;
use ceramqc_db::repositories::ProfileRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /profiles`.
#[derive(Debug, Deserialize)]
pub struct ProfileListParams {
    pub role: Option<String>,
}

/// GET /api/v1/profiles
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProfileListParams>,
) -> AppResult<Json<DataResponse<Vec<Profile>>>> {
    if let Some(role) = &params.role {
        validate_role(role)?;
    }
    let profiles = ProfileRepo::list(&state.pool, params.role.as_deref()).await?;
    Ok(Json(DataResponse { data: profiles }))
}

/// GET /api/v1/profiles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Profile>> {
    let profile = ProfileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Profile", id)))?;
    Ok(Json(profile))
}
