use crate::Result as CoreErrorResult;

use serde::Deserialize;
use serde_json::Value;

/// Webhook body exactly as the provider sent it.
///
/// Only the outer shape is typed. `action.data` varies per action type and is
/// dereferenced lazily by the normalizer, so unsupported actions never fail on
/// fields they do not carry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNotification {
    #[serde(default)]
    pub action: Option<RawAction>,
    /// Fallback source of board identity (`model.id`).
    #[serde(default)]
    pub model: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub data: Value,
}

impl RawNotification {
    #[track_caller]
    pub fn from_slice(body: &[u8]) -> CoreErrorResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// `model.id`, when it is a string.
    pub fn model_id(&self) -> Option<&str> {
        self.model.as_ref()?.get("id")?.as_str()
    }
}

impl RawAction {
    /// Non-null entry of `action.data`.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name).filter(|value| !value.is_null())
    }

    /// `action.data.board.id`, when it is a string.
    pub fn board_id(&self) -> Option<&str> {
        self.field("board")?.get("id")?.as_str()
    }
}
