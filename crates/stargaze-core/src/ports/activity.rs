//! Activity log port - the community "recent activity" panel.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What happened to an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Shared,
    Liked,
    Unliked,
    Updated,
    Removed,
}

impl ActivityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Shared => "shared",
            ActivityKind::Liked => "liked",
            ActivityKind::Unliked => "unliked",
            ActivityKind::Updated => "updated",
            ActivityKind::Removed => "removed",
        }
    }
}

/// A single feed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub kind: ActivityKind,
    pub observation_id: Uuid,
    pub observation_title: String,
    /// Who did it.
    pub actor: String,
    pub at: DateTime<Utc>,
}

/// Bounded store of recent activity.
#[async_trait]
pub trait ActivityLog: Send + Sync {
    /// Record an event, evicting the oldest one when full.
    async fn record(&self, event: ActivityEvent);

    /// Up to `limit` events, most recent first.
    async fn recent(&self, limit: usize) -> Vec<ActivityEvent>;
}
