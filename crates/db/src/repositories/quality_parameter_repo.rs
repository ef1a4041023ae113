//! Repository for the `quality_parameters` table.

use ceramqc_core::types::DbId;
use sqlx::PgPool;

use crate::models::quality_parameter::{CreateQualityParameter, QualityParameter};

const COLUMNS: &str =
    "id, name, iso_code, description, unit, min_value, max_value, category, created_at";

/// Provides access to the ISO parameter catalogue.
pub struct QualityParameterRepo;

impl QualityParameterRepo {
    /// Insert a new parameter, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateQualityParameter,
    ) -> Result<QualityParameter, sqlx::Error> {
        let query = format!(
            "INSERT INTO quality_parameters
                (name, iso_code, description, unit, min_value, max_value, category)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QualityParameter>(&query)
            .bind(&input.name)
            .bind(&input.iso_code)
            .bind(&input.description)
            .bind(&input.unit)
            .bind(input.min_value)
            .bind(input.max_value)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Find a parameter by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<QualityParameter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quality_parameters WHERE id = $1");
        sqlx::query_as::<_, QualityParameter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all parameters, grouped by category then name.
    pub async fn list(pool: &PgPool) -> Result<Vec<QualityParameter>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM quality_parameters ORDER BY category ASC, name ASC");
        sqlx::query_as::<_, QualityParameter>(&query)
            .fetch_all(pool)
            .await
    }
}
