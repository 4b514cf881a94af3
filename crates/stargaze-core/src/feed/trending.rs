//! Recency-weighted engagement score for the `Trending` sort.

use chrono::{DateTime, Utc};

use crate::domain::Observation;

/// Exponent applied to age; higher values make old posts sink faster.
pub const GRAVITY: f64 = 1.5;

/// A comment counts for this many likes.
pub const COMMENT_WEIGHT: f64 = 2.0;

/// Hours added to every age so brand-new posts do not divide by zero.
const AGE_OFFSET_HOURS: f64 = 2.0;

/// `(likes + 2 * comments + 1) / (age_hours + 2) ^ GRAVITY`.
///
/// Observations dated after `now` are scored as if just posted.
pub fn trending_score(observation: &Observation, now: DateTime<Utc>) -> f64 {
    let age_secs = (now - observation.created_at).num_seconds().max(0);
    let age_hours = age_secs as f64 / 3600.0;
    let engagement = f64::from(observation.like_count)
        + COMMENT_WEIGHT * f64::from(observation.comment_count)
        + 1.0;
    engagement / (age_hours + AGE_OFFSET_HOURS).powf(GRAVITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, Category};
    use chrono::Duration;

    fn posted(hours_ago: i64, likes: u32, comments: u32, now: DateTime<Utc>) -> Observation {
        let mut obs = Observation::new(
            "t".to_string(),
            "d".to_string(),
            Category::Aurora,
            Author::new("James Wilson", None),
            now - Duration::hours(hours_ago),
        );
        obs.like_count = likes;
        obs.comment_count = comments;
        obs
    }

    #[test]
    fn newer_posts_outrank_older_ones_with_equal_engagement() {
        let now = Utc::now();
        let fresh = posted(1, 50, 5, now);
        let stale = posted(48, 50, 5, now);
        assert!(trending_score(&fresh, now) > trending_score(&stale, now));
    }

    #[test]
    fn engagement_raises_score() {
        let now = Utc::now();
        let score = |obs: &Observation| trending_score(obs, now);
        let quiet = score(&posted(5, 10, 0, now));
        assert!(score(&posted(5, 100, 0, now)) > quiet);
        // Comments weigh more than likes.
        let liked = score(&posted(5, 20, 0, now));
        assert!(score(&posted(5, 10, 10, now)) > liked);
    }

    #[test]
    fn future_posts_are_treated_as_new() {
        let now = Utc::now();
        let fresh = posted(0, 3, 0, now);
        let future = posted(-10, 3, 0, now);
        assert_eq!(trending_score(&fresh, now), trending_score(&future, now));

        let expected = 4.0 / 2f64.powf(GRAVITY);
        assert!((trending_score(&fresh, now) - expected).abs() < 1e-9);
    }
}
