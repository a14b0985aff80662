pub mod action_kind;
pub mod board_id;
pub mod card_change;
pub mod channel;
pub mod domain_event;
pub mod raw_notification;
