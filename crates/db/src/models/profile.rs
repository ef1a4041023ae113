//! Staff profile model.

use ceramqc_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: Option<String>,
    pub created_at: Timestamp,
}
