use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

pub const MAX_BOARD_ID_LENGTH: usize = 128;

/// Identifier of a board on the task-board provider. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BoardId(String);

impl BoardId {
    #[track_caller]
    pub fn parse(value: impl Into<String>) -> CoreErrorResult<Self> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(CoreError::InvalidBoardId {
                value,
                reason: "cannot be empty",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if value.len() > MAX_BOARD_ID_LENGTH {
            return Err(CoreError::InvalidBoardId {
                value,
                reason: "exceeds maximum length (128)",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BoardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
