use crate::BroadcastReport;

use metrics::{counter, gauge};

const PREFIX: &str = "tb_ws";

/// Counters and gauges for the real-time channel and webhook ingest.
///
/// Only records; installing an exporter is left to the binary.
#[derive(Clone, Default)]
pub struct Metrics;

impl Metrics {
    pub fn new() -> Self {
        Self
    }

    pub fn connection_established(&self) {
        counter!(format!("{PREFIX}.connections.established")).increment(1);
        gauge!(format!("{PREFIX}.connections.active")).increment(1.0);
    }

    /// `reason`: normal, shutdown, heartbeat_timeout, violations or error
    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{PREFIX}.connections.closed.{reason}")).increment(1);
        gauge!(format!("{PREFIX}.connections.active")).decrement(1.0);
    }

    /// Valid client request (`join` / `leave`)
    pub fn message_received(&self, kind: &str) {
        counter!(format!("{PREFIX}.messages.received.{kind}")).increment(1);
    }

    /// Membership actually changed
    pub fn subscription_changed(&self, action: &str) {
        counter!(format!("{PREFIX}.subscriptions.{action}")).increment(1);
    }

    /// Invalid frame, keyed by the error code sent back to the client
    pub fn error_occurred(&self, code: &str) {
        counter!(format!("{PREFIX}.errors.{code}")).increment(1);
    }

    pub fn delivery_failed(&self, reason: &str) {
        counter!(format!("{PREFIX}.broadcast.failed.{reason}")).increment(1);
    }

    pub fn broadcast_completed(&self, report: &BroadcastReport) {
        counter!(format!("{PREFIX}.broadcast.{}", report.event)).increment(1);
        counter!(format!("{PREFIX}.messages.sent")).increment(report.delivered as u64);
        gauge!(format!("{PREFIX}.broadcast.recipients")).set(report.recipients as f64);
    }

    /// One provider callback, labelled by `IngestOutcome::label`
    pub fn webhook_outcome(&self, outcome: &str) {
        counter!(format!("{PREFIX}.webhooks.{outcome}")).increment(1);
    }
}
