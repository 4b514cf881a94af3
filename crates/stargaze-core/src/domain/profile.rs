use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::draft::{non_blank, required_text};
use super::observation::{Author, Observation};
use super::stats::top_contributors;
use crate::error::DomainError;

/// Likes a single observation needs for the popular post achievement.
pub const POPULAR_POST_LIKES: u32 = 100;

/// Observations needed for the active member achievement.
pub const ACTIVE_MEMBER_POSTS: usize = 10;

const MAX_BIO_CHARS: usize = 500;

/// The current user's editable profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub avatar: Option<String>,
    pub email: String,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(author: Author, email: impl Into<String>, joined_at: DateTime<Utc>) -> Self {
        Self {
            name: author.name,
            avatar: author.avatar,
            email: email.into(),
            location: None,
            bio: None,
            joined_at,
        }
    }

    /// The profile as it appears on the observations it authors.
    pub fn author(&self) -> Author {
        Author::new(self.name.clone(), self.avatar.clone())
    }
}

/// Partial profile edit. `None` leaves a field untouched; a blank
/// `location` or `bio` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.location.is_none() && self.bio.is_none()
    }

    /// Check every field, reporting all problems together.
    pub fn validate(self) -> Result<ProfileEdit, DomainError> {
        if self.is_empty() {
            return Err(DomainError::Validation(vec!["no fields to update".to_string()]));
        }

        let mut errors = Vec::new();
        let name = self
            .name
            .as_deref()
            .and_then(|n| required_text(n, "name", &mut errors));
        let email = self.email.as_deref().and_then(|e| {
            let email = required_text(e, "email", &mut errors)?;
            if is_valid_email(&email) {
                Some(email)
            } else {
                errors.push(format!("email '{email}' is not a valid address"));
                None
            }
        });
        let bio = self
            .bio
            .map(|b| non_blank(Some(b.as_str())).map(str::to_string));
        if matches!(&bio, Some(Some(b)) if b.chars().count() > MAX_BIO_CHARS) {
            errors.push(format!("bio must be at most {MAX_BIO_CHARS} characters"));
        }

        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        Ok(ProfileEdit {
            name,
            email,
            location: self
                .location
                .map(|l| non_blank(Some(l.as_str())).map(str::to_string)),
            bio,
        })
    }
}

/// A validated [`ProfilePatch`], ready to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEdit {
    name: Option<String>,
    email: Option<String>,
    location: Option<Option<String>>,
    bio: Option<Option<String>>,
}

impl ProfileEdit {
    /// The new display name, if the edit changes it.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn apply_to(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(email) = self.email {
            profile.email = email;
        }
        if let Some(location) = self.location {
            profile.location = location;
        }
        if let Some(bio) = self.bio {
            profile.bio = bio;
        }
    }
}

/// `local@domain.tld` with no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

/// Milestones shown on the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    FirstObserver,
    PopularPost,
    ActiveMember,
}

impl AchievementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AchievementKind::FirstObserver => "first_observer",
            AchievementKind::PopularPost => "popular_post",
            AchievementKind::ActiveMember => "active_member",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AchievementKind::FirstObserver => "First Observer",
            AchievementKind::PopularPost => "Popular Post",
            AchievementKind::ActiveMember => "Active Member",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AchievementKind::FirstObserver => "Shared your first observation",
            AchievementKind::PopularPost => "Received 100+ likes on a post",
            AchievementKind::ActiveMember => "Posted 10+ observations",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub kind: AchievementKind,
    /// Posting time of the observation that earned it.
    pub earned_at: DateTime<Utc>,
}

/// Per-user numbers on the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub observations: usize,
    pub total_likes: u64,
    /// Position in the contributor ranking, `None` before the first post.
    pub rank: Option<usize>,
    pub achievements: Vec<Achievement>,
}

impl ProfileStats {
    pub fn compute(observations: &[Observation], author_name: &str) -> Self {
        let mut own: Vec<&Observation> = observations
            .iter()
            .filter(|o| o.author.name == author_name)
            .collect();
        own.sort_by_key(|o| (o.created_at, o.id));

        let rank = top_contributors(observations, usize::MAX)
            .iter()
            .position(|c| c.name == author_name)
            .map(|i| i + 1);

        let earned = [
            (AchievementKind::FirstObserver, own.first()),
            (
                AchievementKind::PopularPost,
                own.iter().find(|o| o.like_count >= POPULAR_POST_LIKES),
            ),
            (AchievementKind::ActiveMember, own.get(ACTIVE_MEMBER_POSTS - 1)),
        ];
        let achievements = earned
            .into_iter()
            .filter_map(|(kind, obs)| {
                obs.map(|o| Achievement {
                    kind,
                    earned_at: o.created_at,
                })
            })
            .collect();

        Self {
            observations: own.len(),
            total_likes: own.iter().map(|o| u64::from(o.like_count)).sum(),
            rank,
            achievements,
        }
    }
}
