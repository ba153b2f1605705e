//! Integration tests for API endpoints.

use axum::http::{header::ACCEPT, HeaderValue, StatusCode};
use axum_test::TestServer;
use bytes::Bytes;
use moodtunes::config::{AnalyzerConfig, AppConfig};
use moodtunes::server::{create_router, AppState};
use serde_json::{json, Value};

/// Create a test server with default configuration
fn create_test_server() -> TestServer {
    create_test_server_with(AppConfig::default())
}

fn create_test_server_with(config: AppConfig) -> TestServer {
    let state = AppState::new(config).unwrap();
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

/// Helper to create msgpack bytes
fn msgpack_bytes<T: serde::Serialize>(value: &T) -> Bytes {
    Bytes::from(rmp_serde::to_vec_named(value).unwrap())
}

fn content_type(response: &axum_test::TestResponse) -> String {
    response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/v1/health").await;

    response.assert_status_ok();
    assert!(content_type(&response).contains("json"));
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["moods"], 11);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_degraded_on_default_config() {
    let state = AppState::new(AppConfig::default())
        .unwrap()
        .with_config_fallback();
    let server = TestServer::new(create_router(state)).unwrap();

    let response = server.get("/api/v1/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["moods"], 11);
}

#[tokio::test]
async fn test_health_endpoint_msgpack() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/health")
        .add_header(ACCEPT, HeaderValue::from_static("application/msgpack"))
        .await;

    response.assert_status_ok();
    assert!(content_type(&response).contains("msgpack"));
    let body: Value = rmp_serde::from_slice(response.as_bytes()).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_config_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/v1/config").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["server"]["port"], 8097);
    assert_eq!(body["analyzer"]["max_request_chars"], 10_000);
    assert_eq!(body["analyzer"]["max_analyzed_chars"], 5000);
}

#[tokio::test]
async fn test_analyze_json() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/mood/analyze")
        .json(&json!({ "text": "I'm feeling absolutely amazing today! So excited and happy!" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["fallback"], false);
    assert!(body.get("reason").is_none());
    assert_eq!(body["result"]["mood"], "happy");
    assert!(body["result"]["confidence"].as_f64().unwrap() >= 0.6);
    assert_eq!(body["query"]["genre"], "pop");
    assert_eq!(body["query"]["mood"], "happy");
    assert_eq!(body["query"]["genres"], body["result"]["genres"]);
}

#[tokio::test]
async fn test_analyze_msgpack() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/mood/analyze")
        .content_type("application/msgpack")
        .add_header(ACCEPT, HeaderValue::from_static("application/msgpack"))
        .bytes(msgpack_bytes(&json!({ "text": "sad" })))
        .await;

    response.assert_status_ok();
    assert!(content_type(&response).contains("msgpack"));
    let body: Value = rmp_serde::from_slice(response.as_bytes()).unwrap();
    assert_eq!(body["result"]["mood"], "sad");
    assert_eq!(body["result"]["detectedKeywords"], json!(["sad"]));
    assert_eq!(body["fallback"], false);
}

#[tokio::test]
async fn test_analyze_msgpack_request_json_response() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/mood/analyze")
        .content_type("application/msgpack")
        .bytes(msgpack_bytes(&json!({ "text": "so angry right now" })))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["result"]["mood"], "angry");
    assert_eq!(body["query"]["genre"], "rock");
}

#[tokio::test]
async fn test_analyze_sanitizes_input() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/mood/analyze")
        .json(&json!({ "text": "so \"sad\" [really] <3" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["result"]["mood"], "sad");
}

#[tokio::test]
async fn test_analyze_empty_text_falls_back() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/mood/analyze")
        .json(&json!({ "text": "" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["fallback"], true);
    assert_eq!(body["reason"], "input text is empty");
    assert_eq!(body["result"]["mood"], "chill");
    assert_eq!(body["result"]["confidence"], 0.7);
    assert_eq!(body["result"]["detectedKeywords"], json!(["default"]));
    assert_eq!(body["result"]["analysis"]["fallback"], true);
}

#[tokio::test]
async fn test_analyze_missing_text() {
    let server = create_test_server();

    let response = server.post("/api/v1/mood/analyze").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_analyze_non_string_text() {
    let server = create_test_server();

    for text in [json!(42), json!(["sad"]), json!({ "mood": "sad" }), json!(true)] {
        let response = server
            .post("/api/v1/mood/analyze")
            .json(&json!({ "text": text }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("must be a string"));
    }
}

#[tokio::test]
async fn test_analyze_text_too_long() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/mood/analyze")
        .json(&json!({ "text": "a".repeat(10_001) }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    // At the limit is accepted, and the engine truncates it further
    let response = server
        .post("/api/v1/mood/analyze")
        .json(&json!({ "text": "a".repeat(10_000) }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_analyze_limit_is_configurable() {
    let server = create_test_server_with(AppConfig {
        analyzer: AnalyzerConfig {
            max_request_chars: 10,
        },
        ..Default::default()
    });

    let response = server
        .post("/api/v1/mood/analyze")
        .json(&json!({ "text": "really sad day" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/v1/mood/analyze")
        .json(&json!({ "text": "sad day" }))
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_analyze_malformed_body() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/mood/analyze")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{not json"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "DESERIALIZATION_ERROR");
}

#[tokio::test]
async fn test_analyze_unsupported_content_type() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/mood/analyze")
        .bytes(Bytes::from_static(b"sad"))
        .content_type("text/plain")
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_mood_list_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/v1/mood/list").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["count"], 11);
    let moods = body["moods"].as_array().unwrap();
    assert_eq!(moods.len(), 11);
    assert_eq!(moods[0]["name"], "happy");
    assert_eq!(moods[10]["name"], "chill");
}

#[tokio::test]
async fn test_get_mood_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/v1/mood/relaxed").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "relaxed");
    assert_eq!(body["energy"], "low");
    assert_eq!(body["tempo"], "slow");
    assert_eq!(body["tempoRange"], json!({ "min": 60, "max": 90 }));
    assert_eq!(body["sampleKeywords"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_get_unknown_mood() {
    let server = create_test_server();

    let response = server.get("/api/v1/mood/sleepy").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
