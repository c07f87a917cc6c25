use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use vitalrisk_bedrock::error::BedrockError;
use vitalrisk_bedrock::insight::InsightClient;
use vitalrisk_core::models::insight::{Insight, InsightTransaction};
use vitalrisk_core::models::prediction::PredictionResult;
use vitalrisk_core::models::token_count::TokenCount;
use vitalrisk_core::models::vitals::VitalsInput;
use vitalrisk_lambda::app;
use vitalrisk_lambda::state::AppState;

struct StubInsights {
    fail: bool,
}

impl InsightClient for StubInsights {
    async fn generate_insight(
        &self,
        _vitals: &VitalsInput,
        _prediction: &PredictionResult,
    ) -> Result<InsightTransaction, BedrockError> {
        if self.fail {
            return Err(BedrockError::Invocation("throttled".to_string()));
        }
        Ok(InsightTransaction {
            id: uuid::Uuid::new_v4(),
            model_id: "stub".to_string(),
            created_at: jiff::Timestamp::now(),
            usage: TokenCount::default(),
            insight: Insight {
                summary: "Elevated blood pressure and glucose.".to_string(),
                risk_factors: vec!["Hypertension".to_string()],
                recommendations: vec!["Follow up with a clinician".to_string()],
            },
        })
    }
}

fn router(fail: bool) -> axum::Router {
    app(AppState::new(StubInsights { fail }))
}

async fn send(router: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(router(false), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn predict_scores_healthy_vitals() {
    let request = post_json(
        "/predict",
        json!({"age": 45, "systolicBP": 120, "diastolicBP": 80, "glucose": 90}),
    );
    let (status, body) = send(router(false), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"]["isAtRisk"], false);
    assert_eq!(body["status"], "not_at_risk");
    assert_eq!(body["label"], "NO RISK DETECTED");
    assert_eq!(body["contributions"].as_array().unwrap().len(), 4);
    assert_eq!(body["contributions"][1]["feature"], "systolicBP");

    let probability = body["prediction"]["probability"].as_f64().unwrap();
    assert!((probability - 0.0521).abs() < 1e-4);
}

#[tokio::test]
async fn predict_rejects_out_of_range_vitals() {
    let request = post_json(
        "/predict",
        json!({"age": 45, "systolicBP": 400, "diastolicBP": 80, "glucose": 10}),
    );
    let (status, body) = send(router(false), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["systolicBP", "glucose"]);
}

#[tokio::test]
async fn assess_includes_insight() {
    let request = post_json(
        "/assess",
        json!({"age": 70, "systolicBP": 180, "diastolicBP": 110, "glucose": 200}),
    );
    let (status, body) = send(router(false), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"]["isAtRisk"], true);
    assert_eq!(body["label"], "RISK DETECTED");
    assert_eq!(body["insight"]["riskFactors"][0], "Hypertension");
}

#[tokio::test]
async fn assess_survives_insight_failure() {
    let request = post_json(
        "/assess",
        json!({"age": 70, "systolicBP": 180, "diastolicBP": 110, "glucose": 200}),
    );
    let (status, body) = send(router(true), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"]["isAtRisk"], true);
    assert!(body["insight"].is_null());
}

#[tokio::test]
async fn boundary_returns_full_grid() {
    let (status, body) = send(router(false), get("/boundary")).await;

    assert_eq!(status, StatusCode::OK);
    let points = body.as_array().unwrap();
    assert_eq!(points.len(), 169);
    assert_eq!(points[0]["systolicBP"], 80.0);
    assert_eq!(points[0]["glucose"], 60.0);
    assert_eq!(points[0]["risk"], 0);
}

#[tokio::test]
async fn reference_lists_cohort_and_regions() {
    let (status, body) = send(router(false), get("/reference")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["points"].as_array().unwrap().len(), 9);
    assert_eq!(body["regions"][1]["cohort"], "at-risk");
}

#[tokio::test]
async fn form_exposes_bounds_and_defaults() {
    let (status, body) = send(router(false), get("/form")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fields"][0]["field"], "age");
    assert_eq!(body["fields"][3]["max"], 400.0);
    assert_eq!(body["defaults"]["systolicBP"], 120.0);
    assert_eq!(body["weights"]["bias"], -13.5);
}

#[tokio::test]
async fn field_bounds_lookup() {
    let (status, body) = send(router(false), get("/form/sbp")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["min"], 70.0);
    assert_eq!(body["unit"], "mmHg");

    let (status, body) = send(router(false), get("/form/cholesterol")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "unknown field: cholesterol");
}
