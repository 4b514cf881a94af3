use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::like::LikeState;

/// Denormalized author of an observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>, avatar: Option<String>) -> Self {
        Self {
            name: name.into(),
            avatar,
        }
    }
}

/// Observation entity - a shared record of a sky-watching event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub category: Category,
    pub location: Option<String>,
    /// When the event was observed, as entered by the author.
    pub observed_at: Option<DateTime<Utc>>,
    pub author: Author,
    pub like_count: u32,
    pub comment_count: u32,
    pub liked_by_current_user: bool,
    /// When the observation was posted.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Observation {
    /// Create a new observation with no engagement yet.
    pub fn new(
        title: String,
        description: String,
        category: Category,
        author: Author,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            image: None,
            category,
            location: None,
            observed_at: None,
            author,
            like_count: 0,
            comment_count: 0,
            liked_by_current_user: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn like_state(&self) -> LikeState {
        LikeState::new(self.liked_by_current_user, self.like_count)
    }

    /// Move the like flag to `liked` and return the resulting state.
    pub fn set_liked(&mut self, liked: bool) -> LikeState {
        let next = self.like_state().set(liked);
        self.liked_by_current_user = next.liked;
        self.like_count = next.count;
        next
    }

    pub fn toggle_like(&mut self) -> LikeState {
        let liked = !self.like_state().liked;
        self.set_liked(liked)
    }

    /// Whether title or description contains `needle`.
    ///
    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
