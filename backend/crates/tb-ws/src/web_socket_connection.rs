use crate::{
    ClientMessage, ConnectionConfig, ConnectionId, ConnectionRateLimiter, ConnectionRegistry,
    Metrics, Result as WsErrorResult, ServerMessage, ShutdownGuard, WsError,
};

use std::panic::Location;

use axum::extract::ws::{CloseFrame, Message, Utf8Bytes, WebSocket, close_code};
use bytes::Bytes;
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::time::{Instant, MissedTickBehavior, interval_at, timeout};

/// Invalid client frames tolerated before the server closes the connection
pub const MAX_VIOLATIONS: u32 = 5;

/// Why the read loop stopped
enum LoopExit {
    ClientClosed,
    Shutdown,
}

/// Manages a single WebSocket connection
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    config: ConnectionConfig,
    metrics: Metrics,
    rate_limiter: ConnectionRateLimiter,
    registry: ConnectionRegistry,
    outbound: mpsc::Sender<Message>,
    violations: u32,
    last_seen: Instant,
}

impl WebSocketConnection {
    /// `outbound` must be the sender the connection was registered with
    pub fn new(
        connection_id: ConnectionId,
        config: ConnectionConfig,
        metrics: Metrics,
        rate_limiter: ConnectionRateLimiter,
        registry: ConnectionRegistry,
        outbound: mpsc::Sender<Message>,
    ) -> Self {
        Self {
            connection_id,
            config,
            metrics,
            rate_limiter,
            registry,
            outbound,
            violations: 0,
            last_seen: Instant::now(),
        }
    }

    /// Handle the WebSocket connection lifecycle.
    ///
    /// Whatever ends the loop, the connection is unregistered exactly once
    /// before this returns.
    pub async fn handle(
        mut self,
        socket: WebSocket,
        mut outbound_rx: mpsc::Receiver<Message>,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        log::info!("WebSocket connection {} established", self.connection_id);
        self.metrics.connection_established();

        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Single writer: broadcasts, acks and pings all go through the queue
        let send_task = tokio::spawn(async move {
            while let Some(msg) = outbound_rx.recv().await {
                let closing = matches!(msg, Message::Close(_));
                if ws_sender.send(msg).await.is_err() || closing {
                    break;
                }
            }
        });

        let period = self.config.heartbeat_interval();
        let mut heartbeat = interval_at(Instant::now() + period, period);
        heartbeat.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let result = loop {
            tokio::select! {
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(msg)) => {
                            self.last_seen = Instant::now();
                            match self.handle_client_message(msg).await {
                                Ok(Some(exit)) => break Ok(exit),
                                Ok(None) => {}
                                Err(e) => break Err(e),
                            }
                        }
                        Some(Err(e)) => {
                            log::warn!(
                                "WebSocket error on connection {}: {}",
                                self.connection_id,
                                e
                            );
                            break Err(WsError::ConnectionClosed {
                                reason: format!("WebSocket error: {}", e),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                        None => break Ok(LoopExit::ClientClosed),
                    }
                }

                _ = heartbeat.tick() => {
                    if self.last_seen.elapsed() > self.config.heartbeat_timeout() {
                        break Err(WsError::HeartbeatTimeout {
                            timeout_secs: self.config.heartbeat_timeout_secs,
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                    if let Err(e) = self.queue(Message::Ping(Bytes::new())) {
                        break Err(e);
                    }
                }

                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {} gracefully", self.connection_id);
                    break Ok(LoopExit::Shutdown);
                }
            }
        };

        if let Some(frame) = close_frame(&result) {
            let _ = self.outbound.try_send(Message::Close(Some(frame)));
        }

        // Cleanup: purge membership, then let the send task drain and stop
        let channels = self.registry.unregister(self.connection_id).await;
        drop(self.outbound);
        let abort = send_task.abort_handle();
        if timeout(self.config.heartbeat_timeout(), send_task)
            .await
            .is_err()
        {
            log::warn!("Send task for connection {} did not finish", self.connection_id);
            abort.abort();
        }

        let reason = match &result {
            Ok(LoopExit::ClientClosed) => "normal",
            Ok(LoopExit::Shutdown) => "shutdown",
            Err(WsError::HeartbeatTimeout { .. }) => "heartbeat_timeout",
            Err(WsError::TooManyViolations { .. }) => "violations",
            Err(_) => "error",
        };
        self.metrics.connection_closed(reason);

        log::info!(
            "WebSocket connection {} closed ({}), left {} channel(s)",
            self.connection_id,
            reason,
            channels.len()
        );

        result.map(|_| ())
    }

    /// Handle a frame from the client. `Some` ends the read loop.
    async fn handle_client_message(&mut self, msg: Message) -> WsErrorResult<Option<LoopExit>> {
        match msg {
            Message::Text(text) => {
                if let Err(e) = self.rate_limiter.check() {
                    log::warn!("Rate limit exceeded for connection {}", self.connection_id);
                    self.violation(e)?;
                    return Ok(None);
                }

                match ClientMessage::parse(text.as_str()) {
                    Ok(request) => self.handle_request(request).await?,
                    Err(e) => self.violation(e)?,
                }
                Ok(None)
            }
            Message::Binary(data) => {
                log::debug!(
                    "Rejected binary frame ({} bytes) from connection {}",
                    data.len(),
                    self.connection_id
                );
                self.violation(WsError::invalid_message("binary frames are not supported"))?;
                Ok(None)
            }
            // Pongs to client pings are sent by the socket itself
            Message::Ping(_) | Message::Pong(_) => Ok(None),
            Message::Close(_) => {
                log::info!("Received close frame from connection {}", self.connection_id);
                Ok(Some(LoopExit::ClientClosed))
            }
        }
    }

    async fn handle_request(&mut self, request: ClientMessage) -> WsErrorResult<()> {
        self.metrics.message_received(request.kind());

        let reply = match &request {
            ClientMessage::JoinBoard(board_id) => {
                if self.registry.join(self.connection_id, board_id).await {
                    self.metrics.subscription_changed("join");
                    log::info!("Connection {} joined board {}", self.connection_id, board_id);
                }
                ServerMessage::joined(board_id)
            }
            ClientMessage::LeaveBoard(board_id) => {
                if self.registry.leave(self.connection_id, board_id).await {
                    self.metrics.subscription_changed("leave");
                    log::info!("Connection {} left board {}", self.connection_id, board_id);
                }
                ServerMessage::left(board_id)
            }
        };

        self.queue(reply.to_message()?)
    }

    /// Report an invalid frame to the client; too many of them is fatal
    fn violation(&mut self, error: WsError) -> WsErrorResult<()> {
        self.violations += 1;
        self.metrics.error_occurred(error.error_code());
        log::debug!(
            "Violation {}/{} on connection {}: {}",
            self.violations,
            MAX_VIOLATIONS,
            self.connection_id,
            error
        );

        self.queue(ServerMessage::error(error.error_code(), error.client_message()).to_message()?)?;

        if self.violations >= MAX_VIOLATIONS {
            log::warn!(
                "Closing connection {} after {} invalid messages",
                self.connection_id,
                self.violations
            );
            return Err(WsError::TooManyViolations {
                violations: self.violations,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Queue a frame without waiting for buffer space
    #[track_caller]
    fn queue(&self, msg: Message) -> WsErrorResult<()> {
        self.outbound.try_send(msg).map_err(|e| match e {
            TrySendError::Full(_) => WsError::SendBufferFull {
                location: ErrorLocation::from(Location::caller()),
            },
            TrySendError::Closed(_) => WsError::ConnectionClosed {
                reason: "send task stopped".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        })
    }
}

/// Close frame sent when the server ends the connection
fn close_frame(result: &WsErrorResult<LoopExit>) -> Option<CloseFrame> {
    let (code, reason) = match result {
        Ok(LoopExit::ClientClosed) => return None,
        Ok(LoopExit::Shutdown) => (close_code::AWAY, "server shutting down"),
        Err(WsError::TooManyViolations { .. }) => (close_code::POLICY, "too many invalid messages"),
        Err(WsError::HeartbeatTimeout { .. }) => (close_code::AWAY, "heartbeat timeout"),
        Err(WsError::SendBufferFull { .. }) => (close_code::POLICY, "client too slow"),
        Err(_) => (close_code::ERROR, "connection error"),
    };

    Some(CloseFrame {
        code,
        reason: Utf8Bytes::from_static(reason),
    })
}
