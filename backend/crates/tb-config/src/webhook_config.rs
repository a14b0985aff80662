use crate::{ConfigError, ConfigErrorResult, is_http_url};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Public URL of `/api/webhooks/callback`, handed to the provider on registration
    pub callback_url: Option<String>,
}

impl WebhookConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(url) = &self.callback_url
            && !is_http_url(url)
        {
            return Err(ConfigError::webhook(format!(
                "webhook.callback_url must be an http(s) URL, got '{}'",
                url
            )));
        }

        Ok(())
    }
}
