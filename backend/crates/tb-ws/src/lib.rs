pub mod app_state;
pub mod board_broadcaster;
pub mod broadcast_report;
pub mod client_message;
pub mod client_subscriptions;
pub mod connection_config;
pub mod connection_id;
pub mod connection_info;
pub mod connection_limits;
pub mod connection_rate_limiter;
pub mod connection_registry;
pub mod error;
pub mod message_validator;
pub mod metrics;
pub mod rate_limiter_factory;
pub mod server_message;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod web_socket_connection;
pub mod webhook_ingress;

pub use app_state::{AppState, handler};
pub use board_broadcaster::BoardBroadcaster;
pub use broadcast_report::BroadcastReport;
pub use client_message::ClientMessage;
pub use client_subscriptions::ClientSubscriptions;
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_info::ConnectionInfo;
pub use connection_limits::ConnectionLimits;
pub use connection_rate_limiter::ConnectionRateLimiter;
pub use connection_registry::ConnectionRegistry;
pub use error::{Result, WsError};
pub use message_validator::MessageValidator;
pub use metrics::Metrics;
pub use rate_limiter_factory::RateLimiterFactory;
pub use server_message::{BOARD_JOINED, BOARD_LEFT, ERROR, ServerMessage};
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use web_socket_connection::{MAX_VIOLATIONS, WebSocketConnection};
pub use webhook_ingress::{IngestOutcome, ingest};

#[cfg(test)]
mod tests;
