//! In-memory per-client rate limiter using governor crate.

use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::{Clock, DefaultClock};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter as GovernorRateLimiter};

use stargaze_core::ports::{RateLimitError, RateLimitResult, RateLimiter};

/// In-memory rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window, per client.
    pub max_requests: u32,
    /// Window duration.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_requests: std::env::var("RATE_LIMIT_MAX_REQUESTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_requests),
            window: std::env::var("RATE_LIMIT_WINDOW_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.window),
        }
    }

    /// GCRA quota: `max_requests` burst, refilled evenly over `window`.
    fn quota(&self) -> Quota {
        let burst = NonZeroU32::new(self.max_requests).unwrap_or(NonZeroU32::MIN);
        Quota::with_period(self.window / burst.get())
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst)
    }
}

/// Checks between two sweeps of idle client keys.
pub const PRUNE_INTERVAL: u64 = 1024;

/// In-memory rate limiter keyed by client, using the GCRA algorithm.
///
/// Keys whose limit has fully replenished are dropped every
/// [`PRUNE_INTERVAL`] checks.
/// Note: Limits are per-process, not distributed across instances.
pub struct InMemoryRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
    clock: DefaultClock,
    checks: AtomicU64,
}

impl InMemoryRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        tracing::info!(
            max_requests = config.max_requests,
            window_secs = config.window.as_secs(),
            "Rate limiter configured"
        );
        Self {
            limiter: GovernorRateLimiter::keyed(config.quota()),
            clock: DefaultClock::default(),
            checks: AtomicU64::new(0),
        }
    }

    pub fn from_env() -> Self {
        Self::new(RateLimitConfig::from_env())
    }

    /// Number of client keys currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }

    /// Forget clients that are back to a full allowance.
    pub fn prune(&self) {
        let before = self.limiter.len();
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
        tracing::debug!(
            before,
            after = self.limiter.len(),
            "Pruned idle rate limit keys"
        );
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check(&self, key: &str) -> Result<RateLimitResult, RateLimitError> {
        if (self.checks.fetch_add(1, Ordering::Relaxed) + 1) % PRUNE_INTERVAL == 0 {
            self.prune();
        }

        match self.limiter.check_key(&key.to_string()) {
            Ok(()) => Ok(RateLimitResult {
                allowed: true,
                reset_after: Duration::ZERO,
            }),
            Err(not_until) => Ok(RateLimitResult {
                allowed: false,
                reset_after: not_until.wait_time_from(self.clock.now()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_requests: u32) -> InMemoryRateLimiter {
        InMemoryRateLimiter::new(RateLimitConfig {
            max_requests,
            window: Duration::from_secs(60),
        })
    }

    #[tokio::test]
    async fn test_allows_burst_then_limits() {
        let limiter = limiter(3);
        for _ in 0..3 {
            assert!(limiter.check("10.0.0.1").await.unwrap().allowed);
        }
        let result = limiter.check("10.0.0.1").await.unwrap();
        assert!(!result.allowed);
        assert!(result.reset_after > Duration::ZERO);
    }

    #[tokio::test]
    async fn test_keys_are_limited_independently() {
        let limiter = limiter(1);
        assert!(limiter.check("10.0.0.1").await.unwrap().allowed);
        assert!(!limiter.check("10.0.0.1").await.unwrap().allowed);
        assert!(limiter.check("10.0.0.2").await.unwrap().allowed);
    }

    fn fast_refill() -> InMemoryRateLimiter {
        InMemoryRateLimiter::new(RateLimitConfig {
            max_requests: 1000,
            window: Duration::from_millis(10),
        })
    }

    #[tokio::test]
    async fn test_prune_drops_idle_clients() {
        let limiter = fast_refill();
        for i in 0..5 {
            limiter.check(&format!("10.0.0.{i}")).await.unwrap();
        }
        assert_eq!(limiter.tracked_clients(), 5);

        tokio::time::sleep(Duration::from_millis(50)).await;
        limiter.prune();
        assert_eq!(limiter.tracked_clients(), 0);
    }

    #[tokio::test]
    async fn test_check_prunes_periodically() {
        let limiter = fast_refill();
        for i in 0..5 {
            limiter.check(&format!("10.0.0.{i}")).await.unwrap();
        }
        tokio::time::sleep(Duration::from_millis(50)).await;

        // Fill up to the next sweep with a single fresh client.
        for _ in 5..PRUNE_INTERVAL {
            limiter.check("10.0.1.1").await.unwrap();
        }
        assert!(limiter.tracked_clients() <= 1);
    }

    #[test]
    fn test_zero_requests_still_builds_a_quota() {
        let config = RateLimitConfig {
            max_requests: 0,
            window: Duration::ZERO,
        };
        assert_eq!(config.quota().burst_size().get(), 1);
    }
}
