#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use ceramqc_api::config::ServerConfig;
use ceramqc_api::router::build_app_router;
use ceramqc_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        default_language: "en".to_string(),
    }
}

/// Build the full application router, with the production middleware
/// stack, over the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "POST", uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "PUT", uri, body).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a batch through the API and return its id.
pub async fn create_batch(pool: &PgPool, id: &str, name: &str) -> String {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/batches",
        serde_json::json!({
            "id": id,
            "name": name,
            "kiln": "Kiln 1",
            "material_lot": "ML-001",
            "created_by": "Fatima Benali",
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "batch creation failed");
    id.to_string()
}

/// Record a measurement of a seeded parameter through the API.
pub async fn record(pool: &PgPool, batch_id: &str, parameter_id: i64, value: f64) -> serde_json::Value {
    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/batches/{batch_id}/measurements"),
        serde_json::json!({
            "parameter_id": parameter_id,
            "value": value,
            "measured_by": "Youssef El Amrani",
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "measurement recording failed");
    body_json(response).await
}

/// Seeded parameter ids, in migration order.
pub const LENGTH: i64 = 1;
pub const WIDTH: i64 = 2;
pub const THICKNESS: i64 = 3;
pub const WARPING: i64 = 4;
pub const WATER_ABSORPTION: i64 = 5;
pub const BREAKING_STRENGTH: i64 = 6;
