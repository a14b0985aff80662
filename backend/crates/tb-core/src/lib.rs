pub mod error;
pub mod models;
pub mod normalizer;

pub use error::{CoreError, Result};
pub use models::action_kind::ActionKind;
pub use models::board_id::{BoardId, MAX_BOARD_ID_LENGTH};
pub use models::card_change::CardChange;
pub use models::channel::Channel;
pub use models::domain_event::{
    CARD_CREATED, CARD_DELETED, CARD_MOVED, CARD_UPDATED, DomainEvent,
};
pub use models::raw_notification::{RawAction, RawNotification};
pub use normalizer::normalize;

#[cfg(test)]
mod tests;
