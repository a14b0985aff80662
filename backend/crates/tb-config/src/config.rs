use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, CorsConfig, LoggingConfig,
    RateLimitConfig, ServerConfig, TrelloConfig, WebSocketConfig, WebhookConfig,
};

use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub trello: TrelloConfig,
    pub webhook: WebhookConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
    pub websocket: WebSocketConfig,
    pub rate_limit: RateLimitConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Load `.env` from the working directory if present
    /// 2. Check for TB_CONFIG_DIR env var, else use ./.tb/
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::accept_dotenv(dotenvy::dotenv())?;

        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    /// A missing `.env` is fine; one that exists but cannot be read or parsed
    /// is a startup error.
    #[track_caller]
    pub(crate) fn accept_dotenv(
        result: Result<PathBuf, dotenvy::Error>,
    ) -> ConfigErrorResult<Option<PathBuf>> {
        match result {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.not_found() => Ok(None),
            Err(source) => Err(ConfigError::Dotenv {
                source,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TB_CONFIG_DIR env var > ./.tb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".tb"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.trello.validate()?;
        self.webhook.validate()?;
        self.cors.validate()?;
        self.websocket.validate()?;
        self.rate_limit.validate()?;

        if let Some(file) = &self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!("  trello: {} (credentials set)", self.trello.base_url);

        match &self.webhook.callback_url {
            Some(url) => info!("  webhook: callback={}", url),
            None => warn!("  webhook: no callback_url configured, registration will fail"),
        }

        info!("  cors: origin={}", self.cors.origin);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  websocket: buffer={}, heartbeat={}s/{}s, rate={}/{}s",
            self.websocket.send_buffer_size,
            self.websocket.heartbeat_interval_secs,
            self.websocket.heartbeat_timeout_secs,
            self.websocket.rate_limit_max_messages,
            self.websocket.rate_limit_window_secs
        );
        info!(
            "  rate_limit: {}/{}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TB_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "TB_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // Trello
        Self::apply_env_option_string("TB_TRELLO_API_KEY", &mut self.trello.api_key);
        Self::apply_env_option_string("TB_TRELLO_TOKEN", &mut self.trello.token);
        Self::apply_env_string("TB_TRELLO_BASE_URL", &mut self.trello.base_url);

        // Webhook
        Self::apply_env_option_string("TB_WEBHOOK_CALLBACK_URL", &mut self.webhook.callback_url);

        // CORS
        Self::apply_env_string("TB_CORS_ORIGIN", &mut self.cors.origin);

        // Logging
        Self::apply_env_parse("TB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TB_LOG_FILE", &mut self.logging.file);

        // WebSocket
        Self::apply_env_parse(
            "TB_WS_SEND_BUFFER_SIZE",
            &mut self.websocket.send_buffer_size,
        );
        Self::apply_env_parse(
            "TB_WS_HEARTBEAT_INTERVAL_SECS",
            &mut self.websocket.heartbeat_interval_secs,
        );
        Self::apply_env_parse(
            "TB_WS_HEARTBEAT_TIMEOUT_SECS",
            &mut self.websocket.heartbeat_timeout_secs,
        );
        Self::apply_env_parse(
            "TB_WS_RATE_LIMIT_MAX_MESSAGES",
            &mut self.websocket.rate_limit_max_messages,
        );
        Self::apply_env_parse(
            "TB_WS_RATE_LIMIT_WINDOW_SECS",
            &mut self.websocket.rate_limit_window_secs,
        );

        // Rate limit
        Self::apply_env_parse(
            "TB_RATE_LIMIT_MAX_REQUESTS",
            &mut self.rate_limit.max_requests,
        );
        Self::apply_env_parse(
            "TB_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
