//! In-memory observation store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use stargaze_core::domain::{Author, LikeChange, Observation, ObservationEdit};
use stargaze_core::error::RepoError;
use stargaze_core::ports::{BaseRepository, ObservationRepository};

/// Observation store backed by a HashMap behind an async RwLock.
///
/// Every mutation happens under a single write lock, so concurrent like
/// toggles on the same observation never lose an update.
/// Note: Data is lost on process restart.
pub struct InMemoryObservationStore {
    observations: RwLock<HashMap<Uuid, Observation>>,
}

impl InMemoryObservationStore {
    pub fn new() -> Self {
        Self {
            observations: RwLock::new(HashMap::new()),
        }
    }

    /// Build a store pre-filled with `observations`. Later duplicates of an
    /// id replace earlier ones.
    pub fn with_observations(observations: impl IntoIterator<Item = Observation>) -> Self {
        let map = observations.into_iter().map(|o| (o.id, o)).collect();
        Self {
            observations: RwLock::new(map),
        }
    }

    pub async fn len(&self) -> usize {
        self.observations.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.observations.read().await.is_empty()
    }

    /// Apply a like change under the write lock. `None` toggles.
    async fn update_like(
        &self,
        id: Uuid,
        liked: Option<bool>,
    ) -> Result<(Observation, LikeChange), RepoError> {
        let mut store = self.observations.write().await;
        let observation = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        let before = observation.like_state();
        let after = match liked {
            Some(liked) => observation.set_liked(liked),
            None => observation.toggle_like(),
        };
        tracing::debug!(
            observation_id = %id,
            liked = after.liked,
            like_count = after.count,
            "Like state updated"
        );
        Ok((observation.clone(), LikeChange { before, after }))
    }
}

impl Default for InMemoryObservationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Observation, Uuid> for InMemoryObservationStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Observation>, RepoError> {
        let store = self.observations.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn insert(&self, observation: Observation) -> Result<Observation, RepoError> {
        let mut store = self.observations.write().await;
        if store.contains_key(&observation.id) {
            return Err(RepoError::Constraint(format!(
                "observation {} already exists",
                observation.id
            )));
        }
        store.insert(observation.id, observation.clone());
        Ok(observation)
    }

    async fn delete(&self, id: Uuid) -> Result<Observation, RepoError> {
        let mut store = self.observations.write().await;
        store.remove(&id).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl ObservationRepository for InMemoryObservationStore {
    async fn list(&self) -> Result<Vec<Observation>, RepoError> {
        let store = self.observations.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn update(
        &self,
        id: Uuid,
        edit: ObservationEdit,
        now: DateTime<Utc>,
    ) -> Result<Observation, RepoError> {
        let mut store = self.observations.write().await;
        let observation = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        edit.apply_to(observation, now);
        Ok(observation.clone())
    }

    async fn set_liked(
        &self,
        id: Uuid,
        liked: bool,
    ) -> Result<(Observation, LikeChange), RepoError> {
        self.update_like(id, Some(liked)).await
    }

    async fn toggle_like(&self, id: Uuid) -> Result<(Observation, LikeChange), RepoError> {
        self.update_like(id, None).await
    }

    async fn rename_author(&self, from: &str, to: Author) -> Result<usize, RepoError> {
        let mut store = self.observations.write().await;
        let mut renamed = 0;
        for observation in store.values_mut().filter(|o| o.author.name == from) {
            observation.author = to.clone();
            renamed += 1;
        }
        tracing::debug!(from, to = %to.name, renamed, "Observations re-attributed");
        Ok(renamed)
    }
}
