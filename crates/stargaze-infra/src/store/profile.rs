//! In-memory profile of the current user.

use async_trait::async_trait;
use tokio::sync::RwLock;

use stargaze_core::domain::{Profile, ProfileEdit};
use stargaze_core::error::RepoError;
use stargaze_core::ports::ProfileRepository;

pub struct InMemoryProfileStore {
    profile: RwLock<Profile>,
}

impl InMemoryProfileStore {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile: RwLock::new(profile),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileStore {
    async fn get(&self) -> Result<Profile, RepoError> {
        Ok(self.profile.read().await.clone())
    }

    async fn update(&self, edit: ProfileEdit) -> Result<(Profile, Profile), RepoError> {
        let mut profile = self.profile.write().await;
        let before = profile.clone();
        edit.apply_to(&mut profile);
        tracing::debug!(name = %profile.name, "Profile updated");
        Ok((before, profile.clone()))
    }
}
