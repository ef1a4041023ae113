//! Repository for the `batches` table.

use ceramqc_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use sqlx::PgPool;

use crate::models::batch::{Batch, BatchListParams, CreateBatch, UpdateBatch};
use crate::models::dashboard::BatchStatusCount;
use crate::repositories::contains_pattern;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, date, kiln, material_lot, status, created_by, passing_rate, created_at, updated_at";

/// Provides CRUD operations for production batches.
pub struct BatchRepo;

impl BatchRepo {
    /// Insert a new batch, returning the created row.
    ///
    /// `status` defaults to `pending` and `date` to now when omitted.
    pub async fn create(pool: &PgPool, input: &CreateBatch) -> Result<Batch, sqlx::Error> {
        let query = format!(
            "INSERT INTO batches (id, name, kiln, material_lot, created_by, status, date)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'pending'), COALESCE($7, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Batch>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(&input.kiln)
            .bind(&input.material_lot)
            .bind(&input.created_by)
            .bind(&input.status)
            .bind(input.date)
            .fetch_one(pool)
            .await
    }

    /// Find a batch by its lot code.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Batch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM batches WHERE id = $1");
        sqlx::query_as::<_, Batch>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a batch with the given lot code exists.
    pub async fn exists(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM batches WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// List batches, newest first, optionally filtered by a case-insensitive
    /// search on id or name and by status.
    pub async fn list(pool: &PgPool, params: &BatchListParams) -> Result<Vec<Batch>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(params.offset);
        let pattern = contains_pattern(params.search.as_deref());

        let query = format!(
            "SELECT {COLUMNS} FROM batches
             WHERE ($1::TEXT IS NULL OR id ILIKE $1 OR name ILIKE $1)
               AND ($2::TEXT IS NULL OR status = $2)
             ORDER BY created_at DESC, id ASC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Batch>(&query)
            .bind(pattern)
            .bind(&params.status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// The most recently created batches.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Batch>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM batches ORDER BY created_at DESC, id ASC LIMIT $1");
        sqlx::query_as::<_, Batch>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// All batches in production-date order, for charting.
    pub async fn list_by_date(pool: &PgPool) -> Result<Vec<Batch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM batches ORDER BY date ASC, id ASC");
        sqlx::query_as::<_, Batch>(&query).fetch_all(pool).await
    }

    /// Update a batch. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateBatch,
    ) -> Result<Option<Batch>, sqlx::Error> {
        let query = format!(
            "UPDATE batches SET
                name = COALESCE($2, name),
                kiln = COALESCE($3, kiln),
                material_lot = COALESCE($4, material_lot),
                status = COALESCE($5, status),
                passing_rate = COALESCE($6, passing_rate)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Batch>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.kiln)
            .bind(&input.material_lot)
            .bind(&input.status)
            .bind(input.passing_rate)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the passing rate, including clearing it to `NULL`.
    pub async fn set_passing_rate(
        pool: &PgPool,
        id: &str,
        passing_rate: Option<f64>,
    ) -> Result<Option<Batch>, sqlx::Error> {
        let query = format!(
            "UPDATE batches SET passing_rate = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Batch>(&query)
            .bind(id)
            .bind(passing_rate)
            .fetch_optional(pool)
            .await
    }

    /// Number of batches per status. Statuses with no batches are omitted.
    pub async fn count_by_status(pool: &PgPool) -> Result<Vec<BatchStatusCount>, sqlx::Error> {
        sqlx::query_as::<_, BatchStatusCount>(
            "SELECT status, COUNT(*) AS count FROM batches GROUP BY status ORDER BY status ASC",
        )
        .fetch_all(pool)
        .await
    }
}
