//! End-to-end tests driving the axum router in-process.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use sales_prediction_api::config::AppConfig;
use sales_prediction_api::noise::{FixedNoise, NoiseSource, ThreadRngNoise};
use sales_prediction_api::services::prediction::PredictionService;
use sales_prediction_api::{app_router, AppState};

fn test_app(noise: Arc<dyn NoiseSource>) -> Router {
    let config = AppConfig::new("127.0.0.1", 0, "development");
    let prediction = Arc::new(PredictionService::new(noise, config.forecast_periods));
    app_router(AppState { config, prediction })
}

async fn send_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn valid_payload() -> Value {
    json!({
        "marketing_spend": 5000.0,
        "social_media_presence": 7,
        "competitor_activity": 4,
        "seasonal_factor": "summer",
        "previous_quarter_sales": 50000.0
    })
}

/// "2026-Q3" -> (2026, 3), for chronological comparison.
fn parse_quarter(label: &str) -> (i32, u32) {
    let (year, quarter) = label
        .split_once("-Q")
        .unwrap_or_else(|| panic!("malformed quarter label: {label}"));
    (year.parse().unwrap(), quarter.parse().unwrap())
}

#[tokio::test]
async fn root_confirms_the_service_is_running() {
    let app = test_app(Arc::new(ThreadRngNoise));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Sales Prediction API is running");
}

#[tokio::test]
async fn predict_returns_the_full_contract_shape() {
    let app = test_app(Arc::new(ThreadRngNoise));
    let (status, body) = send_json(app, "/predict", valid_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["predicted_sales"].is_number());

    let confidence = body["confidence"].as_i64().unwrap();
    assert!((80..=95).contains(&confidence));

    let scenarios = body["similar_scenarios"].as_array().unwrap();
    let labels: Vec<&str> = scenarios
        .iter()
        .map(|s| s["scenario"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        [
            "Higher Marketing",
            "Lower Competition",
            "Higher Social Media",
            "Previous Quarter",
            "Different Season",
        ]
    );

    let forecast = body["sales_forecast"].as_array().unwrap();
    assert_eq!(forecast.len(), 6);
    let quarters: Vec<(i32, u32)> = forecast
        .iter()
        .map(|p| parse_quarter(p["quarter"].as_str().unwrap()))
        .collect();
    for pair in quarters.windows(2) {
        assert!(pair[0] < pair[1], "labels must strictly increase: {quarters:?}");
    }
}

#[tokio::test]
async fn predict_with_noise_off_reproduces_the_documented_baseline() {
    let app = test_app(Arc::new(FixedNoise::new(1.0)));
    let payload = json!({
        "marketing_spend": 0.0,
        "social_media_presence": 0,
        "competitor_activity": 0,
        "seasonal_factor": "spring",
        "previous_quarter_sales": 1000.0
    });

    let (status, body) = send_json(app, "/predict", payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["predicted_sales"].as_f64().unwrap(), 1155.0);
    assert_eq!(body["confidence"].as_i64().unwrap(), 80);
}

#[tokio::test]
async fn previous_quarter_scenario_is_the_literal_input() {
    let app = test_app(Arc::new(ThreadRngNoise));
    let mut payload = valid_payload();
    payload["previous_quarter_sales"] = json!(1234.5678);

    let (status, body) = send_json(app, "/predict", payload).await;

    assert_eq!(status, StatusCode::OK);
    let scenarios = body["similar_scenarios"].as_array().unwrap();
    assert_eq!(scenarios[3]["scenario"], "Previous Quarter");
    assert_eq!(scenarios[3]["sales"].as_f64().unwrap(), 1234.5678);
}

#[tokio::test]
async fn unknown_season_tags_are_accepted() {
    let app = test_app(Arc::new(ThreadRngNoise));
    let mut payload = valid_payload();
    payload["seasonal_factor"] = json!("monsoon");

    let (status, _body) = send_json(app, "/predict", payload).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn negative_marketing_spend_is_rejected_with_detail() {
    let app = test_app(Arc::new(ThreadRngNoise));
    let mut payload = valid_payload();
    payload["marketing_spend"] = json!(-100.0);

    let (status, body) = send_json(app, "/predict", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("marketing_spend"));
}

#[tokio::test]
async fn missing_fields_are_rejected_before_the_core() {
    let app = test_app(Arc::new(ThreadRngNoise));
    let payload = json!({ "marketing_spend": 5000.0 });

    let (status, _body) = send_json(app, "/predict", payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = test_app(Arc::new(ThreadRngNoise));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.headers().get("x-request-id").is_some());
}

#[tokio::test]
async fn health_probes_report_up() {
    let app = test_app(Arc::new(ThreadRngNoise));

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/detailed")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "up");
    assert_eq!(body["details"]["estimator"]["status"], "up");
}

#[tokio::test]
async fn openapi_spec_is_served() {
    let app = test_app(Arc::new(ThreadRngNoise));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["paths"]["/predict"].is_object());
}
