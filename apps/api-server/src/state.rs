//! Application state - shared across all handlers.

use std::sync::Arc;

use chrono::Utc;
use stargaze_core::domain::{Author, Profile};
use stargaze_core::ports::{ActivityLog, ObservationRepository, ProfileRepository};
use stargaze_infra::store::fixtures;
use stargaze_infra::{InMemoryActivityLog, InMemoryObservationStore, InMemoryProfileStore};

use crate::config::AppConfig;
use crate::middleware::error::AppResult;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub observations: Arc<dyn ObservationRepository>,
    pub activity: Arc<dyn ActivityLog>,
    pub profile: Arc<dyn ProfileRepository>,
    pub feed_page_size: u32,
}

impl AppState {
    /// Build the application state with in-memory implementations.
    pub fn new(config: &AppConfig) -> Self {
        let now = Utc::now();
        let user = config.current_user.clone();
        let email = config.current_user_email.as_str();

        let (store, profile) = if config.seed_fixtures {
            let seed = fixtures::all(&user, now);
            tracing::info!(count = seed.len(), "Seeding observation store");
            (
                InMemoryObservationStore::with_observations(seed),
                fixtures::owner_profile(user, email, now),
            )
        } else {
            tracing::info!("Starting with an empty observation store");
            (InMemoryObservationStore::new(), Profile::new(user, email, now))
        };

        tracing::info!(current_user = %profile.name, "Application state initialized");

        Self {
            observations: Arc::new(store),
            activity: Arc::new(InMemoryActivityLog::new(config.activity_capacity)),
            profile: Arc::new(InMemoryProfileStore::new(profile)),
            feed_page_size: config.feed_page_size,
        }
    }

    /// The identity submissions and likes are made under.
    pub async fn current_author(&self) -> AppResult<Author> {
        Ok(self.profile.get().await?.author())
    }
}
