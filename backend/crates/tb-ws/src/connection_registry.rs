use crate::{
    ClientSubscriptions, ConnectionId, ConnectionInfo, ConnectionLimits, Result as WsErrorResult,
    WsError,
};

use tb_core::{BoardId, Channel};

use std::collections::{HashMap, HashSet};
use std::panic::Location;
use std::sync::Arc;

use axum::extract::ws::Message;
use error_location::ErrorLocation;
use log::{debug, info, warn};
use tokio::sync::{RwLock, mpsc};

/// Subscription registry: live connections and the boards they joined.
///
/// Membership is kept in two indexes, connection -> channels (inside
/// `ConnectionInfo`) and channel -> connections (used for fan-out). Every
/// mutation updates both under one write lock, so a reader never sees a
/// connection in a channel without the channel in the connection's set.
pub struct ConnectionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    limits: ConnectionLimits,
}

struct RegistryInner {
    /// All active connections by connection_id
    connections: HashMap<ConnectionId, ConnectionInfo>,
    /// Members of each non-empty channel
    channels: HashMap<Channel, HashSet<ConnectionId>>,
}

impl ConnectionRegistry {
    pub fn new(limits: ConnectionLimits) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                connections: HashMap::new(),
                channels: HashMap::new(),
            })),
            limits,
        }
    }

    /// Register a new connection with empty membership
    pub async fn register(&self, sender: mpsc::Sender<Message>) -> WsErrorResult<ConnectionId> {
        let mut inner = self.inner.write().await;

        if inner.connections.len() >= self.limits.max_total {
            warn!(
                "Total connection limit reached: {}/{}",
                inner.connections.len(),
                self.limits.max_total
            );
            return Err(WsError::ConnectionLimitExceeded {
                current: inner.connections.len(),
                max: self.limits.max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let connection_id = ConnectionId::new();
        let info = ConnectionInfo {
            connection_id,
            connected_at: chrono::Utc::now(),
            sender,
            subscriptions: ClientSubscriptions::new(),
        };

        inner.connections.insert(connection_id, info);
        info!(
            "Registered connection {connection_id} ({} total)",
            inner.connections.len()
        );

        Ok(connection_id)
    }

    /// Join `board_id`'s channel. Idempotent: returns false when already a
    /// member or when the connection is not registered.
    pub async fn join(&self, connection_id: ConnectionId, board_id: &BoardId) -> bool {
        let mut inner = self.inner.write().await;
        let channel = Channel::for_board(board_id.clone());

        let Some(info) = inner.connections.get_mut(&connection_id) else {
            warn!("Join from unknown connection {connection_id} ignored");
            return false;
        };

        if !info.subscriptions.join(channel.clone()) {
            debug!("Connection {connection_id} already in {channel}");
            return false;
        }

        let members = inner.channels.entry(channel.clone()).or_default();
        members.insert(connection_id);
        debug!(
            "Connection {connection_id} joined {channel} ({} members)",
            members.len()
        );

        true
    }

    /// Leave `board_id`'s channel. Idempotent: returns false when not a member.
    pub async fn leave(&self, connection_id: ConnectionId, board_id: &BoardId) -> bool {
        let mut inner = self.inner.write().await;
        let channel = Channel::for_board(board_id.clone());

        let left = inner
            .connections
            .get_mut(&connection_id)
            .is_some_and(|info| info.subscriptions.leave(&channel));

        if left {
            inner.remove_member(&channel, connection_id);
            debug!("Connection {connection_id} left {channel}");
        }

        left
    }

    /// Drop a connection and purge it from every channel.
    /// Returns the channels it was removed from; empty if already unregistered.
    pub async fn unregister(&self, connection_id: ConnectionId) -> Vec<Channel> {
        let mut inner = self.inner.write().await;

        let Some(mut info) = inner.connections.remove(&connection_id) else {
            return Vec::new();
        };

        let channels = info.subscriptions.drain();
        for channel in &channels {
            inner.remove_member(channel, connection_id);
        }

        info!(
            "Unregistered connection {connection_id} from {} channel(s) ({} total remaining)",
            channels.len(),
            inner.connections.len()
        );

        channels
    }

    /// Current members of `board_id`'s channel (empty when nobody joined)
    pub async fn members_of(&self, board_id: &BoardId) -> HashSet<ConnectionId> {
        let inner = self.inner.read().await;
        inner
            .channels
            .get(&Channel::for_board(board_id.clone()))
            .cloned()
            .unwrap_or_default()
    }

    /// Outbound queues of every member of `board_id`'s channel
    pub async fn senders_for(
        &self,
        board_id: &BoardId,
    ) -> Vec<(ConnectionId, mpsc::Sender<Message>)> {
        let inner = self.inner.read().await;
        let Some(members) = inner.channels.get(&Channel::for_board(board_id.clone())) else {
            return Vec::new();
        };

        members
            .iter()
            .filter_map(|id| {
                inner
                    .connections
                    .get(id)
                    .map(|info| (*id, info.sender.clone()))
            })
            .collect()
    }

    /// Channels a connection has joined (empty for unknown connections)
    pub async fn channels_of(&self, connection_id: ConnectionId) -> HashSet<Channel> {
        let inner = self.inner.read().await;
        inner
            .connections
            .get(&connection_id)
            .map(|info| info.subscriptions.channels().cloned().collect())
            .unwrap_or_default()
    }

    /// Get information about a specific connection
    pub async fn get(&self, connection_id: ConnectionId) -> Option<ConnectionInfo> {
        let inner = self.inner.read().await;
        inner.connections.get(&connection_id).cloned()
    }

    /// Get total connection count
    pub async fn total_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.connections.len()
    }

    /// Number of channels with at least one member
    pub async fn channel_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.channels.len()
    }
}

impl RegistryInner {
    fn remove_member(&mut self, channel: &Channel, connection_id: ConnectionId) {
        if let Some(members) = self.channels.get_mut(channel) {
            members.remove(&connection_id);
            if members.is_empty() {
                self.channels.remove(channel);
                debug!("Removed empty channel {channel}");
            }
        }
    }
}

impl Clone for ConnectionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            limits: self.limits.clone(),
        }
    }
}
