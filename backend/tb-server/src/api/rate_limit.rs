use crate::{ApiError, ApiResult};

use tb_config::RateLimitConfig;

use std::num::NonZeroU32;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use axum::{extract::Request, extract::State, middleware::Next, response::Response};
use error_location::ErrorLocation;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};

/// Shared quota for the REST proxy and webhook management routes
#[derive(Clone)]
pub struct ApiRateLimiter {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl ApiRateLimiter {
    /// `max_requests` per `window_secs`, all of it usable as a burst
    pub fn new(config: &RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.window_secs.max(1)) / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    #[track_caller]
    pub fn check(&self) -> ApiResult<()> {
        self.limiter.check().map_err(|_| ApiError::RateLimited {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Middleware rejecting requests over quota with 429
pub async fn enforce(
    State(limiter): State<ApiRateLimiter>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    limiter.check()?;
    Ok(next.run(request).await)
}
