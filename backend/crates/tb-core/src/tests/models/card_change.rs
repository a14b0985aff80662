use crate::{ActionKind, CardChange, RawAction};

use serde_json::{Value, json};

fn action(data: Value) -> RawAction {
    RawAction {
        action_type: "updateCard".to_string(),
        data,
    }
}

#[test]
fn given_list_before_and_after_when_classified_then_moved() {
    let action = action(json!({
        "card": { "id": "c1" },
        "listBefore": { "id": "l1" },
        "listAfter": { "id": "l2" }
    }));

    assert_eq!(CardChange::classify(&action), CardChange::Moved);
}

#[test]
fn given_only_list_after_when_classified_then_edited() {
    let action = action(json!({
        "card": { "id": "c1" },
        "listAfter": { "id": "l2" }
    }));

    assert_eq!(CardChange::classify(&action), CardChange::Edited);
}

#[test]
fn given_null_list_before_when_classified_then_edited() {
    let action = action(json!({
        "card": { "id": "c1" },
        "listBefore": null,
        "listAfter": { "id": "l2" }
    }));

    assert_eq!(CardChange::classify(&action), CardChange::Edited);
}

#[test]
fn given_known_tags_when_mapped_then_supported() {
    assert_eq!(ActionKind::from_tag("createCard"), ActionKind::CreateCard);
    assert_eq!(ActionKind::from_tag("updateCard"), ActionKind::UpdateCard);
    assert_eq!(ActionKind::from_tag("deleteCard"), ActionKind::DeleteCard);
}

#[test]
fn given_other_tags_when_mapped_then_unsupported() {
    for tag in ["commentCard", "CreateCard", "", "updateList"] {
        let kind = ActionKind::from_tag(tag);
        assert_eq!(kind, ActionKind::Unsupported, "tag {tag:?}");
        assert!(!kind.is_supported());
    }
}
