mod board_id;
mod card_change;
mod domain_event;
