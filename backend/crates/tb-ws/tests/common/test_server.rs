#![allow(dead_code)]

use tb_config::WebhookConfig;
use tb_trello::TrelloClient;
use tb_ws::{
    AppState, BoardBroadcaster, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Metrics,
    RateLimiterFactory, ShutdownCoordinator,
};

use std::sync::Arc;

use axum::{Router, routing::get};
use axum_test::TestServer;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Configuration for test server instances
#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub max_connections_total: usize,
    pub rate_limit_max_messages: u32,
    pub rate_limit_window_secs: u64,
    pub send_buffer_size: usize,
    pub heartbeat_interval_secs: u64,
    pub heartbeat_timeout_secs: u64,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            max_connections_total: 100,
            rate_limit_max_messages: 100,
            rate_limit_window_secs: 60,
            send_buffer_size: 32,
            heartbeat_interval_secs: 30,
            heartbeat_timeout_secs: 60,
        }
    }
}

impl TestServerConfig {
    /// Create config with strict connection limits (for limit tests)
    pub fn with_strict_limits() -> Self {
        Self {
            max_connections_total: 2,
            ..Default::default()
        }
    }

    /// Create config with a one-second heartbeat (for timeout tests)
    pub fn with_fast_heartbeat() -> Self {
        Self {
            heartbeat_interval_secs: 1,
            heartbeat_timeout_secs: 2,
            ..Default::default()
        }
    }

    /// Create config with strict rate limits (for rate limit tests)
    pub fn with_strict_rate_limits() -> Self {
        Self {
            rate_limit_max_messages: 3,
            rate_limit_window_secs: 60,
            ..Default::default()
        }
    }
}

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

/// Create a TestServer with default configuration
pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default())
}

/// Create a TestServer with custom configuration
pub fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let (app, app_state) = create_app(config);
    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

/// Build the Axum Router with AppState
fn create_app(config: TestServerConfig) -> (Router, AppState) {
    let registry = ConnectionRegistry::new(ConnectionLimits {
        max_total: config.max_connections_total,
    });
    let metrics = Metrics::default();

    let app_state = AppState {
        broadcaster: BoardBroadcaster::new(registry.clone(), metrics.clone()),
        registry,
        rate_limiter_factory: RateLimiterFactory::new(
            config.rate_limit_max_messages,
            config.rate_limit_window_secs,
        ),
        metrics,
        shutdown: ShutdownCoordinator::new(),
        config: ConnectionConfig {
            send_buffer_size: config.send_buffer_size,
            heartbeat_interval_secs: config.heartbeat_interval_secs,
            heartbeat_timeout_secs: config.heartbeat_timeout_secs,
        },
        allowed_origin: Some(TEST_ORIGIN.to_string()),
        // Never called by the real-time channel
        trello: Arc::new(TrelloClient::new("http://127.0.0.1:9", "test-key", "test-token")),
        webhook: WebhookConfig::default(),
    };

    let router = Router::new()
        .route("/ws", get(tb_ws::handler))
        .with_state(app_state.clone());

    (router, app_state)
}
