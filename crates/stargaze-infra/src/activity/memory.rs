//! In-memory activity log - a bounded ring of recent events.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;

use stargaze_core::ports::{ActivityEvent, ActivityLog};

/// Default number of events kept.
pub const DEFAULT_CAPACITY: usize = 50;

/// Activity log keeping the newest `capacity` events.
pub struct InMemoryActivityLog {
    events: RwLock<VecDeque<ActivityEvent>>,
    capacity: usize,
}

impl InMemoryActivityLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }
}

impl Default for InMemoryActivityLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl ActivityLog for InMemoryActivityLog {
    async fn record(&self, event: ActivityEvent) {
        let mut events = self.events.write().await;
        if events.len() == self.capacity {
            events.pop_back();
        }
        tracing::debug!(
            kind = event.kind.as_str(),
            observation_id = %event.observation_id,
            actor = %event.actor,
            "Activity recorded"
        );
        events.push_front(event);
    }

    async fn recent(&self, limit: usize) -> Vec<ActivityEvent> {
        let events = self.events.read().await;
        events.iter().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use stargaze_core::ports::ActivityKind;
    use uuid::Uuid;

    use super::*;

    fn event(title: &str) -> ActivityEvent {
        ActivityEvent {
            kind: ActivityKind::Liked,
            observation_id: Uuid::new_v4(),
            observation_title: title.to_string(),
            actor: "Sarah Chen".to_string(),
            at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_recent_is_newest_first() {
        let log = InMemoryActivityLog::default();
        log.record(event("first")).await;
        log.record(event("second")).await;

        let recent = log.recent(10).await;
        let titles: Vec<&str> = recent
            .iter()
            .map(|e| e.observation_title.as_str())
            .collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest() {
        let log = InMemoryActivityLog::new(2);
        log.record(event("a")).await;
        log.record(event("b")).await;
        log.record(event("c")).await;

        let recent = log.recent(10).await;
        let titles: Vec<&str> = recent
            .iter()
            .map(|e| e.observation_title.as_str())
            .collect();
        assert_eq!(titles, vec!["c", "b"]);
    }

    #[tokio::test]
    async fn test_limit() {
        let log = InMemoryActivityLog::default();
        for i in 0..5 {
            log.record(event(&i.to_string())).await;
        }
        assert_eq!(log.recent(3).await.len(), 3);
        assert!(log.recent(0).await.is_empty());
    }
}
