//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod activity;
mod rate_limit;
mod repository;

pub use activity::{ActivityEvent, ActivityKind, ActivityLog};
pub use rate_limit::{RateLimitError, RateLimitResult, RateLimiter};
pub use repository::{BaseRepository, ObservationRepository, ProfileRepository};
