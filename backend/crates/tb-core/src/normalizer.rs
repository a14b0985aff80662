//! Maps provider webhook notifications onto [`DomainEvent`]s.

use crate::{
    ActionKind, BoardId, CardChange, CoreError, DomainEvent, RawAction, RawNotification,
    Result as CoreErrorResult,
};

use serde_json::Value;

/// Classify a raw notification.
///
/// * `Ok(None)`: nothing to relay. The body had no `action` (provider probe),
///   the action type is not one we relay, or no board could be resolved.
/// * `Err(MalformedNotification)`: a relayed action type lacked the field its
///   event needs.
pub fn normalize(raw: &RawNotification) -> CoreErrorResult<Option<DomainEvent>> {
    let Some(action) = raw.action.as_ref() else {
        return Ok(None);
    };

    let kind = ActionKind::from_tag(&action.action_type);
    if !kind.is_supported() {
        return Ok(None);
    }

    let Some(board_id) = resolve_board_id(raw, action) else {
        return Ok(None);
    };

    let event = match kind {
        ActionKind::CreateCard => DomainEvent::CardCreated {
            board_id,
            card: require_card(action)?,
        },
        ActionKind::UpdateCard => {
            let card = require_card(action)?;
            match CardChange::classify(action) {
                CardChange::Moved => DomainEvent::CardMoved { board_id, card },
                CardChange::Edited => DomainEvent::CardUpdated { board_id, card },
            }
        }
        ActionKind::DeleteCard => DomainEvent::CardDeleted {
            board_id,
            card_id: require_card_id(action)?,
        },
        ActionKind::Unsupported => return Ok(None),
    };

    Ok(Some(event))
}

/// `action.data.board.id`, falling back to `model.id`.
fn resolve_board_id(raw: &RawNotification, action: &RawAction) -> Option<BoardId> {
    action
        .board_id()
        .and_then(|id| BoardId::parse(id).ok())
        .or_else(|| raw.model_id().and_then(|id| BoardId::parse(id).ok()))
}

#[track_caller]
fn require_card(action: &RawAction) -> CoreErrorResult<Value> {
    action
        .field("card")
        .filter(|card| card.is_object())
        .cloned()
        .ok_or_else(|| CoreError::malformed(&action.action_type, "card"))
}

#[track_caller]
fn require_card_id(action: &RawAction) -> CoreErrorResult<String> {
    action
        .field("card")
        .and_then(|card| card.get("id"))
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CoreError::malformed(&action.action_type, "card.id"))
}
