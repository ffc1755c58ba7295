// Test helper functions

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt as TowerServiceExt;
use unified_search::core::config::Config;
use unified_search::core::services::Services;
use unified_search::http;

/// Default config with the simulated latency disabled
#[allow(dead_code)]
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.search.latency_ms = 0;
    config
}

/// Create test services without simulated latency
#[allow(dead_code)]
pub fn create_test_services() -> Arc<Services> {
    Arc::new(Services::new(test_config()))
}

/// Create the full application router with test services
#[allow(dead_code)]
pub fn create_test_app() -> Router {
    http::build_router(create_test_services())
}

/// Create the application router from a custom config
#[allow(dead_code)]
pub fn create_test_app_with(config: Config) -> Router {
    http::build_router(Arc::new(Services::new(config)))
}

/// Read a response body as JSON
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&body).expect("Response body is not valid JSON")
}

/// POST a raw body to the search endpoint
#[allow(dead_code)]
pub async fn post_search(app: Router, body: impl Into<Body>) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(http::SEARCH_PATH)
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, body_json(response).await)
}
