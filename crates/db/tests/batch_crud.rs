//! Integration tests for batch, measurement, defect and report repositories.
//!
//! Exercises the repository layer against a real database:
//! - Batch defaults, search and update
//! - Measurement insertion with its parameter snapshot
//! - Foreign key, unique and check constraint violations
//! - Cascade delete of a batch's children

use assert_matches::assert_matches;
use ceramqc_db::models::batch::{BatchListParams, CreateBatch, UpdateBatch};
use ceramqc_db::models::defect::{CreateDefect, DefectListParams};
use ceramqc_db::models::measurement::NewMeasurement;
use ceramqc_db::models::report::NewReport;
use ceramqc_db::repositories::{BatchRepo, DefectRepo, MeasurementRepo, ReportRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Seeded "Length" parameter: band [598, 602] mm.
const LENGTH_PARAM_ID: i64 = 1;

fn new_batch(id: &str, name: &str) -> CreateBatch {
    CreateBatch {
        id: id.to_string(),
        name: name.to_string(),
        kiln: "Kiln 1".to_string(),
        material_lot: "ML-001".to_string(),
        created_by: "Fatima Benali".to_string(),
        status: None,
        date: None,
    }
}

fn new_measurement(batch_id: &str, value: f64, status: &'static str) -> NewMeasurement {
    NewMeasurement {
        batch_id: batch_id.to_string(),
        parameter_id: LENGTH_PARAM_ID,
        parameter: "Length".to_string(),
        unit: "mm".to_string(),
        value,
        min: 598.0,
        max: 602.0,
        status,
        measured_by: "Youssef El Amrani".to_string(),
    }
}

fn new_defect(defect_type: &str) -> CreateDefect {
    CreateDefect {
        defect_type: defect_type.to_string(),
        severity: "medium".to_string(),
        description: "Hairline crack along the edge".to_string(),
        image_url: None,
        reported_by: "Youssef El Amrani".to_string(),
    }
}

fn list_params(search: Option<&str>, status: Option<&str>) -> BatchListParams {
    BatchListParams {
        search: search.map(str::to_string),
        status: status.map(str::to_string),
        limit: None,
        offset: None,
    }
}

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_batch_defaults(pool: PgPool) {
    let batch = BatchRepo::create(&pool, &new_batch("B-2024-001", "Marocain Beige 30x60"))
        .await
        .unwrap();
    assert_eq!(batch.id, "B-2024-001");
    assert_eq!(batch.status, "pending");
    assert!(batch.passing_rate.is_none());

    assert!(BatchRepo::exists(&pool, "B-2024-001").await.unwrap());
    assert!(!BatchRepo::exists(&pool, "B-0000-000").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_batch_id_rejected(pool: PgPool) {
    BatchRepo::create(&pool, &new_batch("B-1", "First")).await.unwrap();
    let result = BatchRepo::create(&pool, &new_batch("B-1", "Second")).await;
    assert_matches!(result, Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some("23505"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_batch_status_rejected(pool: PgPool) {
    let mut input = new_batch("B-1", "First");
    input.status = Some("shipped".to_string());
    let result = BatchRepo::create(&pool, &input).await;
    assert!(result.is_err(), "Unknown status should violate the check constraint");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_batches_search_and_status(pool: PgPool) {
    BatchRepo::create(&pool, &new_batch("B-2024-001", "Marocain Beige"))
        .await
        .unwrap();
    BatchRepo::create(&pool, &new_batch("B-2024-002", "Atlas Grey"))
        .await
        .unwrap();
    let mut completed = new_batch("B-2024-003", "Atlas White");
    completed.status = Some("completed".to_string());
    BatchRepo::create(&pool, &completed).await.unwrap();

    let all = BatchRepo::list(&pool, &list_params(None, None)).await.unwrap();
    assert_eq!(all.len(), 3);

    let atlas = BatchRepo::list(&pool, &list_params(Some("atlas"), None))
        .await
        .unwrap();
    assert_eq!(atlas.len(), 2);

    let by_id = BatchRepo::list(&pool, &list_params(Some("2024-001"), None))
        .await
        .unwrap();
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].name, "Marocain Beige");

    let done = BatchRepo::list(&pool, &list_params(Some("atlas"), Some("completed")))
        .await
        .unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, "B-2024-003");

    // LIKE wildcards in the search text match literally.
    let none = BatchRepo::list(&pool, &list_params(Some("%"), None)).await.unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_batch(pool: PgPool) {
    BatchRepo::create(&pool, &new_batch("B-1", "Before")).await.unwrap();

    let updated = BatchRepo::update(
        &pool,
        "B-1",
        &UpdateBatch {
            name: Some("After".to_string()),
            kiln: None,
            material_lot: None,
            status: Some("inProgress".to_string()),
            passing_rate: Some(92.5),
        },
    )
    .await
    .unwrap()
    .expect("Update should return the row");

    assert_eq!(updated.name, "After");
    assert_eq!(updated.kiln, "Kiln 1");
    assert_eq!(updated.status, "inProgress");
    assert_eq!(updated.passing_rate, Some(92.5));

    let cleared = BatchRepo::set_passing_rate(&pool, "B-1", None)
        .await
        .unwrap()
        .unwrap();
    assert!(cleared.passing_rate.is_none());

    let missing = BatchRepo::update(
        &pool,
        "B-404",
        &UpdateBatch {
            name: Some("Ghost".to_string()),
            kiln: None,
            material_lot: None,
            status: None,
            passing_rate: None,
        },
    )
    .await
    .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_passing_rate_out_of_range_rejected(pool: PgPool) {
    BatchRepo::create(&pool, &new_batch("B-1", "Batch")).await.unwrap();
    let result = BatchRepo::set_passing_rate(&pool, "B-1", Some(101.0)).await;
    assert!(result.is_err(), "passing_rate above 100 should fail");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_by_status(pool: PgPool) {
    BatchRepo::create(&pool, &new_batch("B-1", "One")).await.unwrap();
    BatchRepo::create(&pool, &new_batch("B-2", "Two")).await.unwrap();
    let mut failed = new_batch("B-3", "Three");
    failed.status = Some("failed".to_string());
    BatchRepo::create(&pool, &failed).await.unwrap();

    let counts = BatchRepo::count_by_status(&pool).await.unwrap();
    let pending = counts.iter().find(|c| c.status == "pending").unwrap();
    assert_eq!(pending.count, 2);
    let failed = counts.iter().find(|c| c.status == "failed").unwrap();
    assert_eq!(failed.count, 1);
    assert!(counts.iter().all(|c| c.status != "completed"));
}

// ---------------------------------------------------------------------------
// Measurements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_measurement_keeps_parameter_snapshot(pool: PgPool) {
    BatchRepo::create(&pool, &new_batch("B-1", "Batch")).await.unwrap();

    let m = MeasurementRepo::create(&pool, &new_measurement("B-1", 600.0, "pass"))
        .await
        .unwrap();
    assert_eq!(m.parameter, "Length");
    assert_eq!(m.unit, "mm");
    assert_eq!(m.status, "pass");

    // Later catalogue edits do not rewrite recorded measurements.
    sqlx::query("UPDATE quality_parameters SET name = 'Tile Length', unit = 'cm' WHERE id = $1")
        .bind(LENGTH_PARAM_ID)
        .execute(&pool)
        .await
        .unwrap();

    let found = MeasurementRepo::find_by_id(&pool, m.id).await.unwrap().unwrap();
    assert_eq!(found.value, 600.0);
    assert_eq!(found.batch_id, "B-1");
    assert_eq!(found.parameter, "Length");
    assert_eq!(found.unit, "mm");
    assert_eq!(found.min, 598.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_measurement_statuses_and_failing(pool: PgPool) {
    BatchRepo::create(&pool, &new_batch("B-1", "One")).await.unwrap();
    BatchRepo::create(&pool, &new_batch("B-2", "Two")).await.unwrap();

    MeasurementRepo::create(&pool, &new_measurement("B-1", 600.0, "pass"))
        .await
        .unwrap();
    MeasurementRepo::create(&pool, &new_measurement("B-1", 605.0, "warning"))
        .await
        .unwrap();
    MeasurementRepo::create(&pool, &new_measurement("B-1", 700.0, "fail"))
        .await
        .unwrap();
    MeasurementRepo::create(&pool, &new_measurement("B-2", 599.0, "pass"))
        .await
        .unwrap();

    let mut statuses = MeasurementRepo::list_statuses_by_batch(&pool, "B-1")
        .await
        .unwrap();
    statuses.sort();
    assert_eq!(statuses, vec!["fail", "pass", "warning"]);

    let failing = MeasurementRepo::list_failing_by_batch(&pool, "B-1")
        .await
        .unwrap();
    assert_eq!(failing.len(), 1);
    assert_eq!(failing[0].value, 700.0);

    let listed = MeasurementRepo::list_by_batch(&pool, "B-2").await.unwrap();
    assert_eq!(listed.len(), 1);

    let all = MeasurementRepo::list_batch_statuses(&pool).await.unwrap();
    assert_eq!(all.len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_measurement_fk_violation_bad_batch(pool: PgPool) {
    let result = MeasurementRepo::create(&pool, &new_measurement("B-404", 600.0, "pass")).await;
    assert_matches!(result, Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some("23503"));
}

// ---------------------------------------------------------------------------
// Defects and reports
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_defect_filters_and_types(pool: PgPool) {
    BatchRepo::create(&pool, &new_batch("B-1", "One")).await.unwrap();
    BatchRepo::create(&pool, &new_batch("B-2", "Two")).await.unwrap();

    DefectRepo::create(&pool, "B-1", &new_defect("crack")).await.unwrap();
    DefectRepo::create(&pool, "B-1", &new_defect("chip")).await.unwrap();
    DefectRepo::create(&pool, "B-2", &new_defect("crack")).await.unwrap();

    let cracks = DefectRepo::list(
        &pool,
        &DefectListParams {
            batch_id: None,
            defect_type: Some("crack".to_string()),
            limit: None,
            offset: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(cracks.len(), 2);

    let b1 = DefectRepo::list_by_batch(&pool, "B-1").await.unwrap();
    assert_eq!(b1.len(), 2);

    let types = DefectRepo::list_types(&pool, Some("B-2")).await.unwrap();
    assert_eq!(types, vec!["crack"]);
    let all_types = DefectRepo::list_types(&pool, None).await.unwrap();
    assert_eq!(all_types.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_defect_type_rejected(pool: PgPool) {
    BatchRepo::create(&pool, &new_batch("B-1", "One")).await.unwrap();
    let result = DefectRepo::create(&pool, "B-1", &new_defect("scratch")).await;
    assert!(result.is_err(), "Unknown defect type should fail");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cascade_delete_batch(pool: PgPool) {
    BatchRepo::create(&pool, &new_batch("B-1", "One")).await.unwrap();
    let m = MeasurementRepo::create(&pool, &new_measurement("B-1", 600.0, "pass"))
        .await
        .unwrap();
    let d = DefectRepo::create(&pool, "B-1", &new_defect("chip")).await.unwrap();
    let r = ReportRepo::create(
        &pool,
        &NewReport {
            batch_id: "B-1".to_string(),
            title: "ISO Compliance Report - One".to_string(),
            report_type: "iso".to_string(),
            format: "pdf".to_string(),
            is_compliant: true,
            summary: "Batch meets ISO requirements.".to_string(),
            generated_by: "Fatima Benali".to_string(),
        },
    )
    .await
    .unwrap();

    sqlx::query("DELETE FROM batches WHERE id = $1")
        .bind("B-1")
        .execute(&pool)
        .await
        .unwrap();

    assert!(MeasurementRepo::find_by_id(&pool, m.id).await.unwrap().is_none());
    assert!(DefectRepo::find_by_id(&pool, d.id).await.unwrap().is_none());
    assert!(ReportRepo::find_by_id(&pool, r.id).await.unwrap().is_none());
}
