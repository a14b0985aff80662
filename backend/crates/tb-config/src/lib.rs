mod config;
mod cors_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;
mod trello_config;
mod webhook_config;
mod websocket_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use cors_config::CorsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use trello_config::TrelloConfig;
pub use webhook_config::WebhookConfig;
pub use websocket_config::WebSocketConfig;

use std::fmt::Display;
use std::ops::RangeInclusive;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 10000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 100000;
const DEFAULT_TRELLO_BASE_URL: &str = "https://api.trello.com/1";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const CONFIG_DIR_ENV: &str = "TB_CONFIG_DIR";
const CONFIG_FILE_NAME: &str = "config.toml";

/// `field` lies within `range` (inclusive on both ends).
pub(crate) fn check_range<T>(field: &str, value: T, range: RangeInclusive<T>) -> ConfigErrorResult<()>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        return Ok(());
    }

    Err(ConfigError::config(format!(
        "{field} must be {}-{}, got {value}",
        range.start(),
        range.end()
    )))
}

/// `value` is an absolute http(s) URL with something after the scheme.
pub(crate) fn is_http_url(value: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        value
            .strip_prefix(scheme)
            .is_some_and(|rest| !rest.trim().is_empty())
    })
}
