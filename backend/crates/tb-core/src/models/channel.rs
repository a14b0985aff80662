use crate::BoardId;

use std::fmt;

/// Multicast group for everyone viewing one board.
///
/// Channels only exist as a membership relation; nothing about them is stored
/// beyond the board they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Channel(BoardId);

impl Channel {
    pub fn for_board(board_id: BoardId) -> Self {
        Self(board_id)
    }

    pub fn board_id(&self) -> &BoardId {
        &self.0
    }
}

impl From<BoardId> for Channel {
    fn from(board_id: BoardId) -> Self {
        Self::for_board(board_id)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board-{}", self.0)
    }
}
