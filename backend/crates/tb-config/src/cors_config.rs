use crate::{ConfigError, ConfigErrorResult, DEFAULT_CORS_ORIGIN, is_http_url};

use serde::Deserialize;

/// Frontend origin allowed to call the API and open the real-time channel.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origin: String::from(DEFAULT_CORS_ORIGIN),
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.origin) {
            return Err(ConfigError::cors(format!(
                "cors.origin must be an http(s) origin, got '{}'",
                self.origin
            )));
        }

        if self.origin.ends_with('/') {
            return Err(ConfigError::cors(format!(
                "cors.origin must not end with '/', got '{}'",
                self.origin
            )));
        }

        Ok(())
    }
}
