use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid board id '{value}': {reason} {location}")]
    InvalidBoardId {
        value: String,
        reason: &'static str,
        location: ErrorLocation,
    },

    #[error("Malformed '{action_type}' notification: missing or invalid '{field}' {location}")]
    MalformedNotification {
        action_type: String,
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Notification body is not valid JSON: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn malformed(action_type: impl Into<String>, field: &'static str) -> Self {
        CoreError::MalformedNotification {
            action_type: action_type.into(),
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CoreError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
