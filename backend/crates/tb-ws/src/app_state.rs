use crate::{
    BoardBroadcaster, ConnectionConfig, ConnectionId, ConnectionLimits, ConnectionRateLimiter,
    ConnectionRegistry, Metrics, RateLimiterFactory, ShutdownCoordinator, WebSocketConnection,
};

use tb_config::{Config, WebhookConfig};
use tb_trello::TrelloClient;

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::{HeaderMap, StatusCode, header::ORIGIN},
    response::Response,
};
use log::{debug, error, info, warn};
use tokio::sync::mpsc;

/// Shared application state for the real-time channel and the HTTP API
#[derive(Clone)]
pub struct AppState {
    pub registry: ConnectionRegistry,
    pub broadcaster: BoardBroadcaster,
    pub rate_limiter_factory: RateLimiterFactory,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
    /// Browser origin allowed to open the real-time channel
    pub allowed_origin: Option<String>,
    pub trello: Arc<TrelloClient>,
    pub webhook: WebhookConfig,
}

impl AppState {
    /// Wire every component from validated configuration
    pub fn from_config(config: &Config, shutdown: ShutdownCoordinator) -> Self {
        let registry = ConnectionRegistry::new(ConnectionLimits {
            max_total: config.server.max_connections,
        });
        let metrics = Metrics::new();

        Self {
            broadcaster: BoardBroadcaster::new(registry.clone(), metrics.clone()),
            registry,
            rate_limiter_factory: RateLimiterFactory::from(&config.websocket),
            metrics,
            shutdown,
            config: ConnectionConfig::from(&config.websocket),
            allowed_origin: Some(config.cors.origin.clone()),
            trello: Arc::new(TrelloClient::new(
                &config.trello.base_url,
                config.trello.api_key(),
                config.trello.token(),
            )),
            webhook: config.webhook.clone(),
        }
    }
}

/// WebSocket upgrade handler
pub async fn handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    check_origin(&headers, state.allowed_origin.as_deref())?;

    // Register before upgrading so the connection limit answers with 503
    let (outbound, outbound_rx) = mpsc::channel::<Message>(state.config.send_buffer_size);
    let connection_id = state
        .registry
        .register(outbound.clone())
        .await
        .map_err(|e| {
            error!("Failed to register connection: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        })?;

    debug!("Upgrading connection {}", connection_id);

    let rate_limiter = state.rate_limiter_factory.create();
    let registry = state.registry.clone();

    Ok(ws
        .on_failed_upgrade(move |e| {
            warn!("WebSocket upgrade for {connection_id} failed: {e}");
            tokio::spawn(async move {
                registry.unregister(connection_id).await;
            });
        })
        .on_upgrade(move |socket| {
            handle_socket(socket, connection_id, outbound, outbound_rx, state, rate_limiter)
        }))
}

/// Handle WebSocket connection after upgrade
async fn handle_socket(
    socket: WebSocket,
    connection_id: ConnectionId,
    outbound: mpsc::Sender<Message>,
    outbound_rx: mpsc::Receiver<Message>,
    state: AppState,
    rate_limiter: ConnectionRateLimiter,
) {
    let shutdown_guard = state.shutdown.subscribe_guard();

    let connection = WebSocketConnection::new(
        connection_id,
        state.config,
        state.metrics.clone(),
        rate_limiter,
        state.registry.clone(),
        outbound,
    );

    match connection.handle(socket, outbound_rx, shutdown_guard).await {
        Ok(()) => info!("Connection {connection_id} finished"),
        Err(e) => warn!("Connection {connection_id} ended with error: {e}"),
    }
}

/// Reject browsers from other origins. Requests without `Origin` are not
/// browser-initiated and pass.
fn check_origin(headers: &HeaderMap, allowed: Option<&str>) -> Result<(), StatusCode> {
    let (Some(allowed), Some(origin)) = (allowed, headers.get(ORIGIN)) else {
        return Ok(());
    };

    match origin.to_str() {
        Ok(origin) if origin == allowed => Ok(()),
        other => {
            warn!("WebSocket upgrade from disallowed origin {:?}", other.ok());
            Err(StatusCode::FORBIDDEN)
        }
    }
}
