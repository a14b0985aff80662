mod connection_registry;

use crate::{ConnectionLimits, ConnectionRegistry};

use tb_core::BoardId;

use axum::extract::ws::Message;
use tokio::sync::mpsc;

pub(crate) fn board(id: &str) -> BoardId {
    BoardId::parse(id).unwrap()
}

pub(crate) fn registry() -> ConnectionRegistry {
    ConnectionRegistry::new(ConnectionLimits::default())
}

pub(crate) fn outbound(capacity: usize) -> (mpsc::Sender<Message>, mpsc::Receiver<Message>) {
    mpsc::channel(capacity)
}

/// Decode a queued text frame into JSON
pub(crate) fn frame_json(msg: Message) -> serde_json::Value {
    match msg {
        Message::Text(text) => serde_json::from_str(text.as_str()).unwrap(),
        other => panic!("expected text frame, got {other:?}"),
    }
}
