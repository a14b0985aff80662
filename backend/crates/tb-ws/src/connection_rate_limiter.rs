use crate::{Result as WsErrorResult, WsError};

use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};

/// Per-connection limit on inbound client frames
pub struct ConnectionRateLimiter {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    max_messages: u32,
    window_secs: u64,
}

impl ConnectionRateLimiter {
    /// Allow `max_messages` per `window_secs`, with the whole allowance
    /// available as a burst.
    pub fn new(max_messages: u32, window_secs: u64) -> Self {
        let burst = NonZeroU32::new(max_messages).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(window_secs.max(1)) / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::direct(quota),
            max_messages,
            window_secs,
        }
    }

    /// Check if a frame is allowed, returns error if rate limited
    #[track_caller]
    pub fn check(&self) -> WsErrorResult<()> {
        self.limiter
            .check()
            .map_err(|_| WsError::RateLimitExceeded {
                limit: self.max_messages,
                window_secs: self.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
