//! Repository for the `reports` table.

use ceramqc_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use ceramqc_core::types::DbId;
use sqlx::PgPool;

use crate::models::report::{NewReport, Report, ReportListParams};
use crate::repositories::contains_pattern;

const COLUMNS: &str =
    "id, batch_id, title, report_type, format, date, is_compliant, summary, generated_by";

/// Provides access to persisted compliance reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Insert a report, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewReport) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports
                (batch_id, title, report_type, format, is_compliant, summary, generated_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(&input.batch_id)
            .bind(&input.title)
            .bind(&input.report_type)
            .bind(&input.format)
            .bind(input.is_compliant)
            .bind(&input.summary)
            .bind(&input.generated_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Reports generated for a batch, newest first.
    pub async fn list_by_batch(pool: &PgPool, batch_id: &str) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reports WHERE batch_id = $1 ORDER BY date DESC, id DESC"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(batch_id)
            .fetch_all(pool)
            .await
    }

    /// All reports, newest first, optionally filtered by a case-insensitive
    /// search on title or batch id.
    pub async fn list(pool: &PgPool, params: &ReportListParams) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reports
             WHERE ($1::TEXT IS NULL OR title ILIKE $1 OR batch_id ILIKE $1)
             ORDER BY date DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(contains_pattern(params.search.as_deref()))
            .bind(clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT))
            .bind(clamp_offset(params.offset))
            .fetch_all(pool)
            .await
    }
}
