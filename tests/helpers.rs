// Shared test helpers for building the router and issuing requests.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use page_extract::{build_router, AppState, Config, Fetcher, HttpFetcher, LogFormat, LogLevel};

/// API key used by every test router.
#[allow(dead_code)] // Used by other test files
pub const TEST_API_KEY: &str = "test-key";

/// Creates a basic Config for testing.
#[allow(dead_code)]
pub fn create_test_config(timeout_seconds: u64) -> Config {
    Config {
        api_key: Some(TEST_API_KEY.to_string()),
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        timeout_seconds,
        user_agent: "page_extract_test/1.0".to_string(),
        ..Default::default()
    }
}

/// Router backed by the real reqwest fetcher.
#[allow(dead_code)]
pub fn http_router(timeout_seconds: u64) -> Router {
    let config = create_test_config(timeout_seconds);
    let fetcher = HttpFetcher::new(&config).expect("Failed to build HTTP fetcher");
    build_router(AppState::new(Arc::new(fetcher), config.api_key))
}

/// Router backed by an arbitrary fetcher and API key.
#[allow(dead_code)]
pub fn router_with(fetcher: impl Fetcher + 'static, api_key: Option<&str>) -> Router {
    build_router(AppState::new(Arc::new(fetcher), api_key.map(str::to_string)))
}

/// Sends `POST /parse` with the given JSON body and optional API key.
#[allow(dead_code)]
pub async fn post_parse(
    router: Router,
    body: &serde_json::Value,
    api_key: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    post_raw(router, body.to_string(), api_key).await
}

/// Sends `POST /parse` with a raw body, which need not be valid JSON.
#[allow(dead_code)]
pub async fn post_raw(
    router: Router,
    body: String,
    api_key: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/parse")
        .header("content-type", "application/json");
    if let Some(key) = api_key {
        builder = builder.header("X-API-Key", key);
    }
    let request = builder
        .body(Body::from(body))
        .expect("Failed to build request");
    send(router, request).await
}

/// Sends a request through the router and decodes the JSON response body.
#[allow(dead_code)]
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.oneshot(request).await.expect("Router failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };
    (status, json)
}
