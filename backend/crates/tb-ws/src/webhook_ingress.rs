use crate::{BoardBroadcaster, BroadcastReport, Metrics};

use tb_core::{RawNotification, normalize};

use log::{debug, error, info, warn};

/// What happened to one webhook body. Never reported back to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Heartbeat, unsupported action or unroutable board: nothing to do
    Ignored,
    /// Event fanned out to the board's channel
    Broadcast(BroadcastReport),
    /// Matched action type without its required fields
    Malformed,
    /// Body is not a notification at all
    ParseError,
    /// Event could not be encoded for delivery
    BroadcastFailed,
}

impl IngestOutcome {
    /// Label used in metrics
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ignored => "ignored",
            Self::Broadcast(_) => "broadcast",
            Self::Malformed => "malformed",
            Self::ParseError => "parse_error",
            Self::BroadcastFailed => "broadcast_error",
        }
    }
}

/// Parse, normalize and fan out one provider callback body.
///
/// Every failure is contained here and only logged and counted, so the
/// callback endpoint can always acknowledge.
pub async fn ingest(body: &[u8], broadcaster: &BoardBroadcaster, metrics: &Metrics) -> IngestOutcome {
    let outcome = run(body, broadcaster).await;
    metrics.webhook_outcome(outcome.label());
    outcome
}

async fn run(body: &[u8], broadcaster: &BoardBroadcaster) -> IngestOutcome {
    if body.iter().all(u8::is_ascii_whitespace) {
        debug!("Webhook with empty body treated as heartbeat");
        return IngestOutcome::Ignored;
    }

    let raw = match RawNotification::from_slice(body) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Webhook body could not be parsed: {}", e);
            return IngestOutcome::ParseError;
        }
    };

    let event = match normalize(&raw) {
        Ok(Some(event)) => event,
        Ok(None) => {
            debug!(
                "Webhook ignored (action: {})",
                raw.action
                    .as_ref()
                    .map(|a| a.action_type.as_str())
                    .unwrap_or("none")
            );
            return IngestOutcome::Ignored;
        }
        Err(e) => {
            warn!("Malformed webhook dropped: {}", e);
            return IngestOutcome::Malformed;
        }
    };

    match broadcaster.broadcast(&event).await {
        Ok(report) => {
            info!(
                "Webhook {} for board {} delivered to {}/{} client(s)",
                report.event, report.board_id, report.delivered, report.recipients
            );
            IngestOutcome::Broadcast(report)
        }
        Err(e) => {
            error!("Broadcast of {} failed: {}", event.event_name(), e);
            IngestOutcome::BroadcastFailed
        }
    }
}
