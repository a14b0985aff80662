use crate::{ClientSubscriptions, ConnectionId};

use axum::extract::ws::Message;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

/// Information about an active connection
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    pub connected_at: DateTime<Utc>,
    /// Outbound queue drained by the connection's send task
    pub sender: mpsc::Sender<Message>,
    pub subscriptions: ClientSubscriptions,
}
