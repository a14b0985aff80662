use crate::{BroadcastReport, ConnectionRegistry, Metrics, Result as WsErrorResult, ServerMessage};

use tb_core::DomainEvent;

use axum::extract::ws::Message;
use log::{debug, warn};
use tokio::sync::mpsc::error::TrySendError;

/// Best-effort multicast of domain events to a board's channel.
///
/// Each recipient gets the frame through its own bounded outbound queue. A
/// full or closed queue only costs that recipient the event.
#[derive(Clone)]
pub struct BoardBroadcaster {
    registry: ConnectionRegistry,
    metrics: Metrics,
}

impl BoardBroadcaster {
    pub fn new(registry: ConnectionRegistry, metrics: Metrics) -> Self {
        Self { registry, metrics }
    }

    /// Deliver `event` to every current member of its board's channel.
    ///
    /// Only fails if the event cannot be serialized; per-recipient failures
    /// are counted in the report.
    pub async fn broadcast(&self, event: &DomainEvent) -> WsErrorResult<BroadcastReport> {
        let board_id = event.board_id();
        let text = ServerMessage::from_event(event).to_text()?;
        let recipients = self.registry.senders_for(board_id).await;

        let mut report = BroadcastReport {
            board_id: board_id.clone(),
            event: event.event_name(),
            recipients: recipients.len(),
            delivered: 0,
            failed: 0,
        };

        for (connection_id, sender) in recipients {
            match sender.try_send(Message::Text(text.clone())) {
                Ok(()) => report.delivered += 1,
                Err(TrySendError::Full(_)) => {
                    report.failed += 1;
                    warn!(
                        "Dropped {} for connection {}: send buffer full",
                        report.event, connection_id
                    );
                    self.metrics.delivery_failed("buffer_full");
                }
                Err(TrySendError::Closed(_)) => {
                    report.failed += 1;
                    debug!(
                        "Dropped {} for connection {}: connection closing",
                        report.event, connection_id
                    );
                    self.metrics.delivery_failed("closed");
                }
            }
        }

        self.metrics.broadcast_completed(&report);
        debug!(
            "Broadcast {} to board {}: {}/{} delivered",
            report.event, report.board_id, report.delivered, report.recipients
        );

        Ok(report)
    }
}
