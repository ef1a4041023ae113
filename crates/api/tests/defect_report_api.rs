//! HTTP-level tests for defects, reports and the parameter catalogue.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_batch, get, post_json, record, LENGTH};
use sqlx::PgPool;

fn defect(defect_type: &str, severity: &str) -> serde_json::Value {
    serde_json::json!({
        "type": defect_type,
        "severity": severity,
        "description": "Hairline crack along the glazed edge",
        "image_url": "https://cdn.example.com/defects/1.jpg",
        "reported_by": "Youssef El Amrani",
    })
}

// ---------------------------------------------------------------------------
// Defects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_defect(pool: PgPool) {
    create_batch(&pool, "B-1", "Batch").await;
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/batches/B-1/defects", defect("crack", "high")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["type"], "crack");
    assert_eq!(json["batch_id"], "B-1");

    let id = json["id"].as_i64().unwrap();
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/defects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_defects_rejected(pool: PgPool) {
    create_batch(&pool, "B-1", "Batch").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/batches/B-1/defects", defect("scratch", "low")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/batches/B-1/defects", defect("chip", "critical")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut blank = defect("chip", "low");
    blank["description"] = serde_json::json!("   ");
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/batches/B-1/defects", blank).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut bad_url = defect("chip", "low");
    bad_url["image_url"] = serde_json::json!("not a url");
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/batches/B-1/defects", bad_url).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/batches/B-404/defects", defect("chip", "low")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_defect_gallery_filters(pool: PgPool) {
    create_batch(&pool, "B-1", "One").await;
    create_batch(&pool, "B-2", "Two").await;
    for (batch, kind) in [("B-1", "crack"), ("B-1", "chip"), ("B-2", "crack")] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            &format!("/api/v1/batches/{batch}/defects"),
            defect(kind, "medium"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/defects?type=crack").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/defects?batch_id=B-1&type=chip").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/batches/B-1/defects").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/defects?type=scratch").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_compliant_report(pool: PgPool) {
    create_batch(&pool, "B-1", "Marocain Beige").await;
    record(&pool, "B-1", LENGTH, 600.0).await;
    record(&pool, "B-1", LENGTH, 605.0).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/batches/B-1/reports",
        serde_json::json!({"report_type": "iso", "generated_by": "Fatima Benali"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["is_compliant"], true);
    assert_eq!(json["format"], "pdf");
    assert_eq!(json["title"], "ISO Compliance Report - Marocain Beige");
    assert!(json["summary"]
        .as_str()
        .unwrap()
        .starts_with("Batch meets ISO requirements."));

    let id = json["id"].as_i64().unwrap();
    let app = common::build_test_app(pool.clone());
    assert_eq!(get(app, &format!("/api/v1/reports/{id}")).await.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/reports").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_compliant_report(pool: PgPool) {
    create_batch(&pool, "B-1", "Batch").await;
    record(&pool, "B-1", LENGTH, 700.0).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/batches/B-1/reports",
        serde_json::json!({
            "report_type": "full",
            "format": "csv",
            "title": "Weekly audit",
            "generated_by": "Karim Idrissi",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["is_compliant"], false);
    assert_eq!(json["title"], "Weekly audit");
    assert_eq!(json["format"], "csv");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/batches/B-1/reports").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_report_request(pool: PgPool) {
    create_batch(&pool, "B-1", "Batch").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/batches/B-1/reports",
        serde_json::json!({"report_type": "weekly", "generated_by": "QA"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/batches/B-1/reports",
        serde_json::json!({"report_type": "iso", "format": "docx", "generated_by": "QA"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/batches/B-404/reports",
        serde_json::json!({"report_type": "iso", "generated_by": "QA"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

async fn generate_report(pool: &PgPool, batch_id: &str, title: &str) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/batches/{batch_id}/reports"),
        serde_json::json!({"report_type": "summary", "title": title, "generated_by": "QA"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_search_by_title_or_batch(pool: PgPool) {
    create_batch(&pool, "B-2024-001", "Beige").await;
    create_batch(&pool, "B-2024-002", "Gris").await;
    generate_report(&pool, "B-2024-001", "Monthly Kiln Review").await;
    generate_report(&pool, "B-2024-002", "Glaze Audit").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/reports?search=kiln").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Monthly Kiln Review");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/reports?search=b-2024-002").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["batch_id"], "B-2024-002");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/reports?search=100%25").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/reports?search=").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_parameter_catalogue(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/parameters").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 6);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/parameters",
        serde_json::json!({
            "name": "Surface Flatness",
            "iso_code": "ISO 10545-2",
            "unit": "mm",
            "min_value": -0.3,
            "max_value": 0.3,
            "category": "dimensional",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/parameters/{id}")).await).await;
    assert_eq!(json["name"], "Surface Flatness");

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/parameters",
        serde_json::json!({
            "name": "Inverted",
            "iso_code": "ISO 0",
            "unit": "mm",
            "min_value": 10.0,
            "max_value": 5.0,
            "category": "other",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/parameters",
        serde_json::json!({
            "name": "Length",
            "iso_code": "ISO 10545-2",
            "unit": "mm",
            "min_value": 1.0,
            "max_value": 2.0,
            "category": "dimensional",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
