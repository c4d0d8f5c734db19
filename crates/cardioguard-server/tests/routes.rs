use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

use cardioguard_core::{ParameterSet, RawParameters};
use cardioguard_model::RiskClassifier;
use cardioguard_model::error::ClassifierError;
use cardioguard_model::fixed::FixedProbability;
use cardioguard_server::app;
use cardioguard_server::state::AppState;

struct Unreachable;

impl RiskClassifier for Unreachable {
    fn name(&self) -> &str {
        "unreachable"
    }

    fn predict(&self, _params: &ParameterSet) -> Result<f64, ClassifierError> {
        Err(ClassifierError::Inference("model backend timed out".to_string()))
    }
}

fn state_with(classifier: impl RiskClassifier + 'static) -> AppState {
    AppState::new(Arc::new(classifier))
}

fn defaults_body() -> String {
    serde_json::to_string(&RawParameters::form_defaults()).unwrap()
}

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn post_assess(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

#[tokio::test]
async fn health_reports_model_name() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(state_with(FixedProbability::new(0.1)), request).await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({ "status": "ok", "model": "fixed-probability" }));
}

#[tokio::test]
async fn parameters_lists_fields_in_model_order() {
    let request = Request::builder()
        .uri("/parameters")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(state_with(FixedProbability::new(0.1)), request).await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    let fields = json.as_array().unwrap();
    assert_eq!(fields.len(), 13);
    assert_eq!(fields[0]["key"], "age");
    assert_eq!(fields[0]["default"], 45.0);
    assert_eq!(fields[1]["choices"], json!(["Female", "Male"]));
    assert_eq!(fields[1]["default"], "Male");
    assert_eq!(fields[12]["model_code"], "thal");
}

#[tokio::test]
async fn assess_returns_report_json() {
    let (status, body) = send(
        state_with(FixedProbability::new(0.85)),
        post_assess("/assess", defaults_body()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["model"], "fixed-probability");
    assert_eq!(json["report"]["risk_level"], "HIGH");
    assert_eq!(json["report"]["risk_percent"], 85.0);
    assert_eq!(json["report"]["health_score"], 75);
    assert_eq!(json["top_features"], json!([]));
}

#[tokio::test]
async fn assess_can_return_markdown() {
    let state = state_with(FixedProbability::new(0.4));
    let response = app(state)
        .oneshot(post_assess("/assess?format=markdown", defaults_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/markdown; charset=utf-8"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("**Overall Clinical Risk Category: MODERATE**"));
    assert!(text.contains("Predicted Probability of Heart Disease: 40.00%"));
}

#[tokio::test]
async fn out_of_range_value_is_unprocessable() {
    let mut raw = RawParameters::form_defaults();
    raw.set(cardioguard_core::Field::Age, 150);
    let (status, body) = send(
        state_with(FixedProbability::new(0.5)),
        post_assess("/assess", serde_json::to_string(&raw).unwrap()),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "age: value 150 is outside range [20, 100]");
    assert_eq!(json["details"][0]["field"], "age");
    assert_eq!(json["details"][0]["kind"], "out_of_range");
}

#[tokio::test]
async fn empty_form_lists_every_missing_field() {
    let (status, body) = send(
        state_with(FixedProbability::new(0.5)),
        post_assess("/assess", "{}"),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "13 parameters are invalid");
    assert_eq!(json["details"].as_array().unwrap().len(), 13);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (status, body) = send(
        state_with(FixedProbability::new(0.5)),
        post_assess("/assess", "{ not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn classifier_failure_is_bad_gateway() {
    let (status, body) = send(state_with(Unreachable), post_assess("/assess", defaults_body())).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "risk model unavailable");
}

#[tokio::test]
async fn probability_outside_unit_interval_is_bad_gateway() {
    let (status, _) = send(
        state_with(FixedProbability::new(1.5)),
        post_assess("/assess", defaults_body()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
