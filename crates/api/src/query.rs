//! Shared query parameter types for API handlers.

use ceramqc_core::analytics::TrendRange;
use serde::Deserialize;

/// Optional batch scope (`?batch_id=`) for analytics endpoints.
#[derive(Debug, Deserialize)]
pub struct BatchScopeParams {
    pub batch_id: Option<String>,
}

/// Chart period (`?range=week|month|quarter|year`) for quality trends.
#[derive(Debug, Deserialize)]
pub struct TrendParams {
    #[serde(default)]
    pub range: TrendRange,
}
