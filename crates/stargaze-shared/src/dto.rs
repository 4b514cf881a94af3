//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Query string of `GET /api/observations`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListObservationsParams {
    pub search: Option<String>,
    /// Category name or `All`.
    pub category: Option<String>,
    /// `recent`, `popular` or `trending`.
    pub sort: Option<String>,
    pub author: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Query string carrying only a result limit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub name: String,
    pub avatar: Option<String>,
}

/// An observation as shown in a feed card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub category: String,
    /// Badge tone of the category.
    pub badge: String,
    pub location: Option<String>,
    pub observed_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub author: AuthorResponse,
    pub like_count: u32,
    pub comment_count: u32,
    pub liked_by_current_user: bool,
}

/// One page of a feed query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPageResponse {
    pub items: Vec<ObservationResponse>,
    pub page: u32,
    pub per_page: u32,
    pub total: usize,
    pub has_more: bool,
}

/// Image metadata sent with a new observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUploadRequest {
    pub file_name: String,
    pub content_type: String,
    pub url: Option<String>,
}

/// Request to share a new observation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateObservationRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<String>,
    pub location: Option<String>,
    /// `YYYY-MM-DD` or RFC 3339.
    pub date: Option<String>,
    pub image: Option<ImageUploadRequest>,
}

/// Partial edit of an observation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateObservationRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Empty string clears the location.
    pub location: Option<String>,
}

/// Like state after a like operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub id: String,
    pub liked: bool,
    pub like_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub name: String,
    pub badge: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_observations: usize,
    pub active_observers: usize,
    pub total_likes: u64,
    pub locations: usize,
    pub this_month: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorResponse {
    pub name: String,
    pub avatar: Option<String>,
    pub observation_count: usize,
    pub total_likes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityResponse {
    /// `shared`, `liked`, `unliked`, `updated` or `removed`.
    pub kind: String,
    pub observation_id: String,
    pub observation_title: String,
    pub actor: String,
    pub at: String,
}

/// The current user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub name: String,
    pub avatar: Option<String>,
    pub email: String,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub joined_at: String,
}

/// Partial profile edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Empty string clears the location.
    pub location: Option<String>,
    /// Empty string clears the bio.
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementResponse {
    /// `first_observer`, `popular_post` or `active_member`.
    pub kind: String,
    pub name: String,
    pub description: String,
    pub earned_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStatsResponse {
    pub observations: usize,
    pub total_likes: u64,
    /// 1-based contributor rank, absent before the first observation.
    pub rank: Option<usize>,
    pub achievements: Vec<AchievementResponse>,
}
