use crate::{ApiError, ApiRateLimiter};

use tb_config::RateLimitConfig;

use googletest::prelude::*;

#[test]
fn test_quota_exhausted_then_rate_limited() {
    let limiter = ApiRateLimiter::new(&RateLimitConfig {
        max_requests: 2,
        window_secs: 900,
    });

    assert_that!(limiter.check(), ok(anything()));
    assert_that!(limiter.check(), ok(anything()));
    assert!(matches!(limiter.check(), Err(ApiError::RateLimited { .. })));
}

#[test]
fn test_clones_share_one_quota() {
    let limiter = ApiRateLimiter::new(&RateLimitConfig {
        max_requests: 1,
        window_secs: 900,
    });
    let clone = limiter.clone();

    assert_that!(limiter.check(), ok(anything()));
    assert_that!(clone.check(), err(anything()));
}
