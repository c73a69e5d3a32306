//! HTTP API tests, driven in-process

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use trac_risk_detector::api::{create_router, AppState};

fn app() -> Router {
    create_router(Arc::new(AppState::new()), "does-not-exist")
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["agent"], "TRAC-Risk-Detector");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_stats_ranges() {
    let request = Request::builder().uri("/api/stats").body(Body::empty()).unwrap();
    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    let total = json["total_analyzed"].as_u64().unwrap();
    assert!((1200..=1800).contains(&total));
    let scams = json["scams_flagged"].as_u64().unwrap();
    assert!((340..=500).contains(&scams));
    let safe = json["safe_addresses"].as_u64().unwrap();
    assert!((700..=1100).contains(&safe));
    assert_eq!(json["network"], "Trac / Intercom P2P");
}

#[tokio::test]
async fn test_analyze_address() {
    let (status, json) =
        send(post_json(r#"{"message": "check 0x0000000000000000000000000000000000000000"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["intent"], "address_check");
    assert_eq!(json["result"]["risk_level"], "HIGH");
}

#[tokio::test]
async fn test_analyze_help() {
    let (status, json) = send(post_json(r#"{"message": "hello"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["intent"], "help");
    assert!(json["result"]["message"].as_str().unwrap().contains("Welcome"));
}

#[tokio::test]
async fn test_analyze_message() {
    let (status, json) =
        send(post_json(r#"{"message": "is it safe? guaranteed 100x, hurry"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["intent"], "message_check");
    assert_eq!(json["result"]["type"], "message_analysis");
    assert_eq!(json["result"]["risk_score"], 55);
}

#[tokio::test]
async fn test_missing_message_is_bad_request() {
    for body in [r#"{}"#, r#"{"message": ""}"#, r#"{"message": null}"#, r#"{"message": 42}"#, "not json"] {
        let (status, json) = send(post_json(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(json["error"]["code"], "API_BAD_REQUEST");
    }
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
