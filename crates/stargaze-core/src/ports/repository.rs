use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Author, LikeChange, Observation, ObservationEdit, Profile, ProfileEdit};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity, failing if the ID is taken.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<T, RepoError>;
}

/// Observation store with feed-specific operations.
///
/// Each mutating call is atomic: no other mutation of the same observation
/// can land between its read and its write.
#[async_trait]
pub trait ObservationRepository: BaseRepository<Observation, Uuid> {
    /// Snapshot of every observation, in no particular order.
    async fn list(&self) -> Result<Vec<Observation>, RepoError>;

    /// Apply a validated edit. Fails with `NotFound` if the observation is gone.
    async fn update(
        &self,
        id: Uuid,
        edit: ObservationEdit,
        now: DateTime<Utc>,
    ) -> Result<Observation, RepoError>;

    /// Set the current user's like flag. Repeating a call is a no-op.
    async fn set_liked(
        &self,
        id: Uuid,
        liked: bool,
    ) -> Result<(Observation, LikeChange), RepoError>;

    /// Flip the current user's like flag.
    async fn toggle_like(&self, id: Uuid) -> Result<(Observation, LikeChange), RepoError>;

    /// Re-attribute every observation by `from` to `to`. Returns how many changed.
    async fn rename_author(&self, from: &str, to: Author) -> Result<usize, RepoError>;
}

/// Storage of the current user's profile.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get(&self) -> Result<Profile, RepoError>;

    /// Apply a validated edit, returning the profile before and after it.
    async fn update(&self, edit: ProfileEdit) -> Result<(Profile, Profile), RepoError>;
}
