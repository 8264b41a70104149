//! Per-client rate limiting
//!
//! Clients are keyed with `SmartIpKeyExtractor` (forwarding headers first,
//! then the peer address). Each client holds up to `burst` request slots and
//! one slot refills every `1 / rps` seconds.
//!
//! # Example
//!
//! ```ignore
//! use smartspeak_gateway::middleware::apply_rate_limit;
//!
//! let app = apply_rate_limit(app, config.rate_limit_requests_per_second, config.rate_limit_burst_size)?;
//! ```

use std::time::Duration;

use axum::{
    Json, Router,
    body::Body,
    http::Response,
    response::IntoResponse,
};
use serde_json::json;
use thiserror::Error;
use tower_governor::{
    GovernorError, GovernorLayer, governor::GovernorConfigBuilder,
    key_extractor::SmartIpKeyExtractor,
};
use tracing::info;

/// Rates at or above this leave the router unlimited (load testing).
pub const RATE_LIMIT_DISABLED_AT: u32 = 100_000;

#[derive(Debug, Error)]
pub enum RateLimitError {
    #[error("Invalid rate limiter configuration: {rps} requests/s with burst {burst}")]
    InvalidConfig { rps: u32, burst: u32 },
}

/// Time for a single request slot to refill at `rps` requests per second.
pub fn replenish_interval(rps: u32) -> Duration {
    let nanos = 1_000_000_000 / u64::from(rps.max(1));
    Duration::from_nanos(nanos.max(1))
}

/// Limiter rejections use the same `{"detail"}` body as every other error.
fn rate_limit_response(error: GovernorError) -> Response<Body> {
    let (parts, message) = error.into_response().into_parts();
    let mut response = (parts.status, Json(json!({ "detail": message }))).into_response();
    response.headers_mut().extend(parts.headers);
    response
}

/// Wrap `router` in a per-IP limiter allowing `rps` requests per second with
/// bursts of up to `burst`.
pub fn apply_rate_limit(router: Router, rps: u32, burst: u32) -> Result<Router, RateLimitError> {
    if rps >= RATE_LIMIT_DISABLED_AT {
        info!("Rate limiting disabled (rate >= {}/s)", RATE_LIMIT_DISABLED_AT);
        return Ok(router);
    }

    let governor_config = GovernorConfigBuilder::default()
        .period(replenish_interval(rps))
        .burst_size(burst)
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .ok_or(RateLimitError::InvalidConfig { rps, burst })?;

    info!("Rate limiting: {} requests/s per IP, burst {}", rps, burst);

    Ok(router.layer(GovernorLayer::new(governor_config).error_handler(rate_limit_response)))
}
