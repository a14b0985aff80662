use crate::{Result as WsErrorResult, WsError};

use tb_core::{BoardId, CoreError};

/// Validates requests from clients
pub struct MessageValidator;

impl MessageValidator {
    /// Validate the board id of a join/leave request
    #[track_caller]
    pub fn validate_board_id(board_id: Option<&str>) -> WsErrorResult<BoardId> {
        let Some(board_id) = board_id else {
            return Err(WsError::invalid_message("boardId is required"));
        };

        BoardId::parse(board_id).map_err(|e| match e {
            CoreError::InvalidBoardId { reason, .. } => {
                WsError::invalid_message(format!("boardId {reason}"))
            }
            other => WsError::from(other),
        })
    }
}
