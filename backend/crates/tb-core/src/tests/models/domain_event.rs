use crate::{BoardId, DomainEvent};

use serde_json::json;

fn board() -> BoardId {
    BoardId::parse("B1").unwrap()
}

#[test]
fn given_each_event_when_named_then_matches_wire_names() {
    let card = json!({ "id": "c1" });

    let created = DomainEvent::CardCreated { board_id: board(), card: card.clone() };
    let updated = DomainEvent::CardUpdated { board_id: board(), card: card.clone() };
    let moved = DomainEvent::CardMoved { board_id: board(), card };
    let deleted = DomainEvent::CardDeleted { board_id: board(), card_id: "c1".into() };

    assert_eq!(created.event_name(), "card:created");
    assert_eq!(updated.event_name(), "card:updated");
    assert_eq!(moved.event_name(), "card:moved");
    assert_eq!(deleted.event_name(), "card:deleted");
}

#[test]
fn given_card_event_when_payload_then_full_snapshot() {
    let card = json!({ "id": "c1", "name": "Write docs", "idList": "l1" });
    let event = DomainEvent::CardUpdated { board_id: board(), card: card.clone() };

    assert_eq!(event.payload(), card);
}

#[test]
fn given_delete_event_when_payload_then_only_id() {
    let event = DomainEvent::CardDeleted { board_id: board(), card_id: "abc".into() };

    assert_eq!(event.payload(), json!({ "id": "abc" }));
    assert_eq!(event.channel().to_string(), "board-B1");
}
