//! Repository for the `defects` table.

use ceramqc_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use ceramqc_core::types::DbId;
use sqlx::PgPool;

use crate::models::defect::{CreateDefect, Defect, DefectListParams};

const COLUMNS: &str =
    "id, batch_id, defect_type, severity, description, image_url, date, reported_by";

/// Provides access to visual defect reports.
pub struct DefectRepo;

impl DefectRepo {
    /// Insert a defect against `batch_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        batch_id: &str,
        input: &CreateDefect,
    ) -> Result<Defect, sqlx::Error> {
        let query = format!(
            "INSERT INTO defects (batch_id, defect_type, severity, description, image_url, reported_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Defect>(&query)
            .bind(batch_id)
            .bind(&input.defect_type)
            .bind(&input.severity)
            .bind(input.description.trim())
            .bind(&input.image_url)
            .bind(&input.reported_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Defect>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM defects WHERE id = $1");
        sqlx::query_as::<_, Defect>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All defects reported against a batch, newest first.
    pub async fn list_by_batch(pool: &PgPool, batch_id: &str) -> Result<Vec<Defect>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM defects WHERE batch_id = $1 ORDER BY date DESC, id DESC"
        );
        sqlx::query_as::<_, Defect>(&query)
            .bind(batch_id)
            .fetch_all(pool)
            .await
    }

    /// Gallery listing, newest first, optionally filtered by batch and type.
    pub async fn list(pool: &PgPool, params: &DefectListParams) -> Result<Vec<Defect>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(params.offset);
        let query = format!(
            "SELECT {COLUMNS} FROM defects
             WHERE ($1::TEXT IS NULL OR batch_id = $1)
               AND ($2::TEXT IS NULL OR defect_type = $2)
             ORDER BY date DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Defect>(&query)
            .bind(&params.batch_id)
            .bind(&params.defect_type)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Number of defects, optionally restricted to one batch.
    pub async fn count(pool: &PgPool, batch_id: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM defects WHERE ($1::TEXT IS NULL OR batch_id = $1)",
        )
        .bind(batch_id)
        .fetch_one(pool)
        .await
    }

    /// Defect type of every defect, optionally restricted to one batch.
    pub async fn list_types(
        pool: &PgPool,
        batch_id: Option<&str>,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT defect_type FROM defects WHERE ($1::TEXT IS NULL OR batch_id = $1)",
        )
        .bind(batch_id)
        .fetch_all(pool)
        .await
    }
}
