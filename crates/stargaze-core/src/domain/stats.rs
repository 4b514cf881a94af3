use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::observation::Observation;

/// Aggregate numbers shown on the community page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityStats {
    pub total_observations: usize,
    /// Distinct authors.
    pub active_observers: usize,
    pub total_likes: u64,
    /// Distinct non-empty locations.
    pub locations: usize,
    /// Observations posted during the calendar month of `now`.
    pub this_month: usize,
}

impl CommunityStats {
    pub fn compute(observations: &[Observation], now: DateTime<Utc>) -> Self {
        let authors: HashSet<&str> = observations
            .iter()
            .map(|o| o.author.name.as_str())
            .collect();
        let locations: HashSet<String> = observations
            .iter()
            .filter_map(|o| o.location.as_deref())
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        let this_month = observations
            .iter()
            .filter(|o| same_month(o.created_at, now))
            .count();

        Self {
            total_observations: observations.len(),
            active_observers: authors.len(),
            total_likes: observations.iter().map(|o| u64::from(o.like_count)).sum(),
            locations: locations.len(),
            this_month,
        }
    }
}

fn same_month(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    (a.year(), a.month()) == (b.year(), b.month())
}

/// An author ranked by how much they share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub avatar: Option<String>,
    pub observation_count: usize,
    pub total_likes: u64,
}

/// Authors ordered by observation count, then total likes, then name.
pub fn top_contributors(observations: &[Observation], limit: usize) -> Vec<Contributor> {
    let mut by_name: BTreeMap<&str, Contributor> = BTreeMap::new();
    for obs in observations {
        let entry = by_name
            .entry(obs.author.name.as_str())
            .or_insert_with(|| Contributor {
                name: obs.author.name.clone(),
                avatar: None,
                observation_count: 0,
                total_likes: 0,
            });
        entry.observation_count += 1;
        entry.total_likes += u64::from(obs.like_count);
        if entry.avatar.is_none() {
            entry.avatar = obs.author.avatar.clone();
        }
    }

    let mut contributors: Vec<Contributor> = by_name.into_values().collect();
    contributors.sort_by(|a, b| {
        b.observation_count
            .cmp(&a.observation_count)
            .then(b.total_likes.cmp(&a.total_likes))
            .then_with(|| a.name.cmp(&b.name))
    });
    contributors.truncate(limit);
    contributors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, Category};
    use chrono::TimeZone;

    fn obs(
        author: &str,
        likes: u32,
        location: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> Observation {
        let mut o = Observation::new(
            "t".to_string(),
            "d".to_string(),
            Category::Other,
            Author::new(author, None),
            created_at,
        );
        o.like_count = likes;
        o.location = location.map(str::to_string);
        o
    }

    #[test]
    fn computes_aggregates() {
        let now = Utc.with_ymd_and_hms(2024, 8, 13, 6, 0, 0).unwrap();
        let last_month = Utc.with_ymd_and_hms(2024, 7, 30, 6, 0, 0).unwrap();
        let observations = vec![
            obs("Sarah Chen", 24, Some("Colorado, USA"), now),
            obs("Sarah Chen", 10, Some("colorado, usa "), now),
            obs("Lisa Park", 43, None, last_month),
        ];

        let stats = CommunityStats::compute(&observations, now);
        assert_eq!(
            stats,
            CommunityStats {
                total_observations: 3,
                active_observers: 2,
                total_likes: 77,
                locations: 1,
                this_month: 2,
            }
        );
    }

    #[test]
    fn empty_collection_has_zero_stats() {
        let stats = CommunityStats::compute(&[], Utc::now());
        assert_eq!(stats.total_observations, 0);
        assert_eq!(stats.active_observers, 0);
        assert_eq!(stats.total_likes, 0);
    }

    #[test]
    fn ranks_contributors() {
        let now = Utc::now();
        let observations = vec![
            obs("Emma Thompson", 89, None, now),
            obs("Alex Johnson", 45, None, now),
            obs("Alex Johnson", 78, None, now),
            obs("Lisa Park", 89, None, now),
        ];

        let top = top_contributors(&observations, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Alex Johnson");
        assert_eq!(top[0].observation_count, 2);
        assert_eq!(top[0].total_likes, 123);
        // Equal counts and likes fall back to name order.
        assert_eq!(top[1].name, "Emma Thompson");
    }
}
