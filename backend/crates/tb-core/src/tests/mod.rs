mod models;

use crate::RawNotification;

use serde_json::Value;

/// Build a notification from a JSON literal.
pub(crate) fn raw(value: Value) -> RawNotification {
    serde_json::from_value(value).unwrap()
}
