use crate::ConnectionRateLimiter;

use tb_config::WebSocketConfig;

/// Factory for creating per-connection rate limiters
#[derive(Debug, Clone)]
pub struct RateLimiterFactory {
    max_messages: u32,
    window_secs: u64,
}

impl RateLimiterFactory {
    pub fn new(max_messages: u32, window_secs: u64) -> Self {
        Self {
            max_messages,
            window_secs,
        }
    }

    pub fn create(&self) -> ConnectionRateLimiter {
        ConnectionRateLimiter::new(self.max_messages, self.window_secs)
    }
}

impl From<&WebSocketConfig> for RateLimiterFactory {
    fn from(config: &WebSocketConfig) -> Self {
        Self::new(config.rate_limit_max_messages, config.rate_limit_window_secs)
    }
}

impl Default for RateLimiterFactory {
    fn default() -> Self {
        Self::from(&WebSocketConfig::default())
    }
}
