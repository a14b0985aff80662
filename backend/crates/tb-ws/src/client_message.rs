use crate::{MessageValidator, Result as WsErrorResult, WsError};

use tb_core::BoardId;

use serde::Deserialize;

/// Client-to-server frame as it arrives on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event")]
enum RawClientMessage {
    #[serde(rename = "join-board")]
    JoinBoard {
        #[serde(rename = "boardId", default)]
        board_id: Option<String>,
    },
    #[serde(rename = "leave-board")]
    LeaveBoard {
        #[serde(rename = "boardId", default)]
        board_id: Option<String>,
    },
}

/// Validated client request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientMessage {
    JoinBoard(BoardId),
    LeaveBoard(BoardId),
}

impl ClientMessage {
    /// Parse and validate a text frame
    #[track_caller]
    pub fn parse(text: &str) -> WsErrorResult<Self> {
        let raw: RawClientMessage = serde_json::from_str(text)
            .map_err(|e| WsError::invalid_message(format!("unrecognized message: {e}")))?;

        match raw {
            RawClientMessage::JoinBoard { board_id } => Ok(Self::JoinBoard(
                MessageValidator::validate_board_id(board_id.as_deref())?,
            )),
            RawClientMessage::LeaveBoard { board_id } => Ok(Self::LeaveBoard(
                MessageValidator::validate_board_id(board_id.as_deref())?,
            )),
        }
    }

    pub fn board_id(&self) -> &BoardId {
        match self {
            Self::JoinBoard(board_id) | Self::LeaveBoard(board_id) => board_id,
        }
    }

    /// Name used in logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::JoinBoard(_) => "join-board",
            Self::LeaveBoard(_) => "leave-board",
        }
    }
}
