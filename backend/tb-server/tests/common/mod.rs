#![allow(dead_code)]

use tb_config::{RateLimitConfig, WebhookConfig};
use tb_trello::TrelloClient;
use tb_ws::{
    AppState, BoardBroadcaster, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Metrics,
    RateLimiterFactory, ShutdownCoordinator,
};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_ORIGIN: &str = "http://localhost:3000";
pub const TEST_KEY: &str = "test-key";
pub const TEST_TOKEN: &str = "test-token";
pub const TEST_CALLBACK_URL: &str = "https://relay.example.com/api/webhooks/callback";

/// App state whose provider client talks to `trello_base_url`
pub fn create_test_app_state(trello_base_url: &str) -> AppState {
    let registry = ConnectionRegistry::new(ConnectionLimits { max_total: 100 });
    let metrics = Metrics::default();

    AppState {
        broadcaster: BoardBroadcaster::new(registry.clone(), metrics.clone()),
        registry,
        rate_limiter_factory: RateLimiterFactory::default(),
        metrics,
        shutdown: ShutdownCoordinator::new(),
        config: ConnectionConfig::default(),
        allowed_origin: Some(TEST_ORIGIN.to_string()),
        trello: Arc::new(TrelloClient::new(trello_base_url, TEST_KEY, TEST_TOKEN)),
        webhook: WebhookConfig {
            callback_url: Some(TEST_CALLBACK_URL.to_string()),
        },
    }
}

/// State for tests that never reach the provider
pub fn create_offline_app_state() -> AppState {
    create_test_app_state("http://127.0.0.1:9")
}

pub fn create_test_router(state: AppState) -> Router {
    tb_server::build_router(state, &RateLimitConfig::default())
}

pub fn create_test_router_with_quota(state: AppState, max_requests: u32) -> Router {
    tb_server::build_router(
        state,
        &RateLimitConfig {
            max_requests,
            window_secs: 900,
        },
    )
}

/// Run one request through a clone of the router
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn raw_post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Assert the status and return the JSON envelope
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
