use crate::{BoardId, Channel};

use serde_json::{Value, json};

pub const CARD_CREATED: &str = "card:created";
pub const CARD_UPDATED: &str = "card:updated";
pub const CARD_MOVED: &str = "card:moved";
pub const CARD_DELETED: &str = "card:deleted";

/// Typed change on a board, ready for fan-out.
///
/// Card snapshots are passed through untouched so clients see every field the
/// provider sent.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    CardCreated { board_id: BoardId, card: Value },
    CardUpdated { board_id: BoardId, card: Value },
    CardMoved { board_id: BoardId, card: Value },
    CardDeleted { board_id: BoardId, card_id: String },
}

impl DomainEvent {
    pub fn board_id(&self) -> &BoardId {
        match self {
            Self::CardCreated { board_id, .. }
            | Self::CardUpdated { board_id, .. }
            | Self::CardMoved { board_id, .. }
            | Self::CardDeleted { board_id, .. } => board_id,
        }
    }

    pub fn channel(&self) -> Channel {
        Channel::for_board(self.board_id().clone())
    }

    /// Name of the server-to-client message carrying this event.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::CardCreated { .. } => CARD_CREATED,
            Self::CardUpdated { .. } => CARD_UPDATED,
            Self::CardMoved { .. } => CARD_MOVED,
            Self::CardDeleted { .. } => CARD_DELETED,
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            Self::CardCreated { card, .. }
            | Self::CardUpdated { card, .. }
            | Self::CardMoved { card, .. } => card.clone(),
            Self::CardDeleted { card_id, .. } => json!({ "id": card_id }),
        }
    }
}
