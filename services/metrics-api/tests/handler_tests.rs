//! End-to-end handler tests driving the full router, middleware
//! included, with in-process requests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use metrics_api::app;
use metrics_api::config::RegionsConfig;
use metrics_api::state::AppState;

fn test_app() -> Router {
    let state = Arc::new(AppState::from_config(RegionsConfig::builtin()));
    app::router(state)
}

async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Raw digital number that decodes to the given Celsius temperature
/// under the default scale (0.02) and offset (-273.15).
fn dn(celsius: f64) -> f64 {
    (celsius + 273.15) / 0.02
}

fn observation(date: &str, temps_c: &[f64]) -> Value {
    let samples: Vec<Value> = temps_c
        .iter()
        .map(|c| json!({"raw_value": dn(*c), "quality_code": 0}))
        .collect();
    json!({"date": date, "samples": samples})
}

// ============================================================================
// Health and catalog
// ============================================================================

#[tokio::test]
async fn test_health_returns_ok() {
    let response = get(test_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_regions_returns_builtin_catalog() {
    let response = get(test_app(), "/v1/regions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let regions = body.as_array().unwrap();
    assert_eq!(regions.len(), 4);
    assert!(regions.iter().any(|r| r["id"] == "NYC001"));
    assert!(regions.iter().all(|r| r["type"] == "builtin"));
}

// ============================================================================
// Observation submission and metric queries
// ============================================================================

#[tokio::test]
async fn test_observation_then_metrics_roundtrip() {
    let app = test_app();

    let response = post_json(
        app.clone(),
        "/v1/regions/NYC001/observations",
        observation("2024-07-01", &[24.0, 26.0]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["record"]["processing_status"], "processed");
    let mean = body["record"]["lst_mean_c"].as_f64().unwrap();
    assert!((mean - 25.0).abs() < 1e-9);
    assert_eq!(body["record"]["valid_pixel_count"], 2);

    let response = get(
        app,
        "/v1/metrics?region_id=NYC001&from=2024-07-01&to=2024-07-31",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let metrics = body["metrics"].as_array().unwrap();
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0]["date"], "2024-07-01");
    let mean = metrics[0]["lst_mean_c"].as_f64().unwrap();
    assert!((mean - 25.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_duplicate_observation_returns_409() {
    let app = test_app();
    let body = observation("2024-07-01", &[25.0]);

    let first = post_json(app.clone(), "/v1/regions/NYC001/observations", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app, "/v1/regions/NYC001/observations", body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let error = body_json(second).await;
    assert_eq!(error["code"], "DataIntegrity");
}

#[tokio::test]
async fn test_observation_for_unknown_region_returns_404() {
    let response = post_json(
        test_app(),
        "/v1/regions/NOPE/observations",
        observation("2024-07-01", &[25.0]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metrics_missing_params_returns_400() {
    let response = get(test_app(), "/v1/metrics?region_id=NYC001").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "InvalidParameter");
}

#[tokio::test]
async fn test_kpi_over_submitted_observations() {
    let app = test_app();

    for (date, temp) in [("2024-07-01", 24.0), ("2024-07-02", 28.0)] {
        let response = post_json(
            app.clone(),
            "/v1/regions/CHI001/observations",
            observation(date, &[temp]),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(
        app,
        "/v1/kpi?region_id=CHI001&from=2024-07-01&to=2024-07-31",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let avg = body["kpi_summary"]["avg_lst_c"].as_f64().unwrap();
    assert!((avg - 26.0).abs() < 1e-9);
    assert_eq!(body["kpi_summary"]["heatwave_days"], 0);
    assert_eq!(body["kpi_summary"]["today"]["date"], "2024-07-02");
}

// ============================================================================
// Custom region registration
// ============================================================================

fn phoenix() -> Value {
    json!({
        "id": "PHX001",
        "name": "Phoenix",
        "bbox": {"min_lon": -112.3, "min_lat": 33.2, "max_lon": -111.9, "max_lat": 33.7},
        "config": {"heatwave_threshold": 40.0}
    })
}

#[tokio::test]
async fn test_create_region_then_submit_observation() {
    let app = test_app();

    let response = post_json(app.clone(), "/v1/regions", phoenix()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["id"], "PHX001");
    assert_eq!(created["type"], "custom");

    let response = get(app.clone(), "/v1/regions").await;
    let regions = body_json(response).await;
    assert_eq!(regions.as_array().unwrap().len(), 5);

    // the new region accepts observations immediately
    let response = post_json(
        app,
        "/v1/regions/PHX001/observations",
        observation("2024-07-01", &[41.0]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["record"]["processing_status"], "processed");
}

#[tokio::test]
async fn test_create_region_is_always_custom() {
    let mut definition = phoenix();
    definition["type"] = json!("builtin");

    let response = post_json(test_app(), "/v1/regions", definition).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["type"], "custom");
}

#[tokio::test]
async fn test_create_region_duplicate_id_returns_409() {
    let app = test_app();

    let first = post_json(app.clone(), "/v1/regions", phoenix()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app, "/v1/regions", phoenix()).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_region_existing_builtin_id_returns_409() {
    let mut definition = phoenix();
    definition["id"] = json!("NYC001");

    let response = post_json(test_app(), "/v1/regions", definition).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_region_rejects_inverted_bbox() {
    let mut definition = phoenix();
    definition["bbox"] =
        json!({"min_lon": -111.9, "min_lat": 33.2, "max_lon": -112.3, "max_lat": 33.7});

    let response = post_json(test_app(), "/v1/regions", definition).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_region_rejects_invalid_config() {
    let mut definition = phoenix();
    definition["config"] = json!({"heatwave_consecutive_days": 0});

    let response = post_json(test_app(), "/v1/regions", definition).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
