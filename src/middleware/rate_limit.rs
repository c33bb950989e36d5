//! Per-IP rate limiting
//!
//! `rate_limit_requests_per_second` is a sustained rate: one token comes back
//! every `1s / rps`, with `rate_limit_burst_size` tokens available up front.
//! Client IPs come from `X-Forwarded-For`, `X-Real-IP`, `Forwarded` or the peer
//! address, in that order.

use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};
use tracing::info;

use crate::config::ServerConfig;

/// Rates at or above this disable limiting, for load testing
pub const RATE_LIMIT_DISABLED_AT: u32 = 100_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateLimitError {
    #[error("Failed to build rate limiter config (rps={rps}, burst={burst})")]
    InvalidConfig { rps: u32, burst: u32 },
}

/// Time between two replenished tokens, or None when limiting is disabled
pub fn replenish_interval(requests_per_second: u32) -> Option<Duration> {
    if requests_per_second >= RATE_LIMIT_DISABLED_AT {
        return None;
    }
    Some(Duration::from_nanos(
        1_000_000_000 / u64::from(requests_per_second.max(1)),
    ))
}

/// Wrap `router` in the governor layer configured by `config`
pub fn apply_rate_limit<S>(
    router: Router<S>,
    config: &ServerConfig,
) -> Result<Router<S>, RateLimitError>
where
    S: Clone + Send + Sync + 'static,
{
    let rps = config.rate_limit_requests_per_second;
    let burst = config.rate_limit_burst_size;

    let governor_layer = match replenish_interval(rps) {
        Some(interval) => {
            let governor_config = GovernorConfigBuilder::default()
                .per_nanosecond(interval.as_nanos() as u64)
                .burst_size(burst)
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .ok_or(RateLimitError::InvalidConfig { rps, burst })?;
            info!(rps, burst, "Rate limiting enabled");
            Some(GovernorLayer::new(governor_config))
        }
        None => {
            info!("Rate limiting disabled (rate >= {}/s)", RATE_LIMIT_DISABLED_AT);
            None
        }
    };

    Ok(router.layer(tower::util::option_layer(governor_layer)))
}
