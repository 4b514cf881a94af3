//! # Stargaze Infrastructure
//!
//! Concrete implementations of the ports defined in `stargaze-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory stores and activity log only
//! - `rate-limit` - Per-client rate limiting via governor

pub mod activity;
pub mod store;

#[cfg(feature = "rate-limit")]
pub mod rate_limit;

pub use activity::InMemoryActivityLog;
pub use store::{InMemoryObservationStore, InMemoryProfileStore};

#[cfg(feature = "rate-limit")]
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};
