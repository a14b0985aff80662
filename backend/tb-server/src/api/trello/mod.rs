pub mod create_card_request;
pub mod trello;
