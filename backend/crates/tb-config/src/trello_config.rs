use crate::{ConfigError, ConfigErrorResult, DEFAULT_TRELLO_BASE_URL, is_http_url};

use std::fmt;

use serde::Deserialize;

/// Credentials and endpoint of the task-board provider.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct TrelloConfig {
    pub api_key: Option<String>,
    pub token: Option<String>,
    pub base_url: String,
}

impl Default for TrelloConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            token: None,
            base_url: String::from(DEFAULT_TRELLO_BASE_URL),
        }
    }
}

impl TrelloConfig {
    /// Both credentials are required; the process must not start without them.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let missing: Vec<&str> = [
            ("trello.api_key (TB_TRELLO_API_KEY)", &self.api_key),
            ("trello.token (TB_TRELLO_TOKEN)", &self.token),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(ConfigError::trello(format!(
                "Missing required credentials: {}",
                missing.join(", ")
            )));
        }

        if !is_http_url(&self.base_url) {
            return Err(ConfigError::trello(format!(
                "trello.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }

    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or_default()
    }
}

// Secrets never reach Debug output.
impl fmt::Debug for TrelloConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrelloConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}
