use axum::extract::State;
use axum::Json;
use ceramqc_core::locale::{is_rtl, SUPPORTED_LANGUAGES};
use ceramqc_core::measurement::GRACE_MARGIN;
use serde::Serialize;

use crate::state::AppState;

/// Server-side defaults the dashboard needs before rendering.
#[derive(Debug, Serialize)]
pub struct Settings {
    pub language: String,
    pub rtl: bool,
    pub supported_languages: &'static [&'static str],
    /// Width of the warning band on each side of a tolerance bound, in percent.
    pub grace_margin_percent: f64,
}

/// GET /api/v1/settings
pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    let language = state.config.default_language.clone();
    Json(Settings {
        rtl: is_rtl(&language),
        language,
        supported_languages: SUPPORTED_LANGUAGES,
        grace_margin_percent: (GRACE_MARGIN * 100.0).round(),
    })
}
