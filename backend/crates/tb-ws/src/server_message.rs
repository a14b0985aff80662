use crate::Result as WsErrorResult;

use tb_core::{BoardId, DomainEvent};

use axum::extract::ws::{Message, Utf8Bytes};
use serde::Serialize;
use serde_json::{Value, json};

pub const BOARD_JOINED: &str = "board:joined";
pub const BOARD_LEFT: &str = "board:left";
pub const ERROR: &str = "error";

/// Server-to-client frame: `{"event": <name>, "payload": <json>}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerMessage {
    pub event: &'static str,
    pub payload: Value,
}

impl ServerMessage {
    pub fn from_event(event: &DomainEvent) -> Self {
        Self {
            event: event.event_name(),
            payload: event.payload(),
        }
    }

    pub fn joined(board_id: &BoardId) -> Self {
        Self {
            event: BOARD_JOINED,
            payload: json!({ "boardId": board_id }),
        }
    }

    pub fn left(board_id: &BoardId) -> Self {
        Self {
            event: BOARD_LEFT,
            payload: json!({ "boardId": board_id }),
        }
    }

    pub fn error(code: &str, message: impl Into<String>) -> Self {
        Self {
            event: ERROR,
            payload: json!({ "code": code, "message": message.into() }),
        }
    }

    /// Serialize once; the returned text is cheap to clone per recipient
    #[track_caller]
    pub fn to_text(&self) -> WsErrorResult<Utf8Bytes> {
        Ok(Utf8Bytes::from(serde_json::to_string(self)?))
    }

    #[track_caller]
    pub fn to_message(&self) -> WsErrorResult<Message> {
        Ok(Message::Text(self.to_text()?))
    }
}
