//! Repository for the `profiles` table.

use ceramqc_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::Profile;

const COLUMNS: &str = "id, name, email, role, avatar, created_at";

/// Read access to staff profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// List profiles ordered by name, optionally only those with `role`.
    pub async fn list(pool: &PgPool, role: Option<&str>) -> Result<Vec<Profile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM profiles
             WHERE ($1::TEXT IS NULL OR role = $1)
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(role)
            .fetch_all(pool)
            .await
    }

    /// Find a profile by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
