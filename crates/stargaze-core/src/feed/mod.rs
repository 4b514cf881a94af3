//! Feed query engine - filter, sort and paginate observations.
//!
//! Everything here is a pure function of its inputs. The current time is
//! passed in so that `Trending` results are reproducible.

mod trending;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, Observation, UnknownCategory};

pub use trending::{COMMENT_WEIGHT, GRAVITY, trending_score};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Upper bound on the page size.
pub const MAX_PER_PAGE: u32 = 50;

/// Category restriction of a feed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    /// `"All"` (any case) or a blank string means no restriction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Feed ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Newest posts first.
    #[default]
    Recent,
    /// Most liked first.
    Popular,
    /// Highest [`trending_score`] first.
    Trending,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Recent => "recent",
            SortMode::Popular => "popular",
            SortMode::Trending => "trending",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort mode '{0}', expected recent, popular or trending")]
pub struct UnknownSortMode(pub String);

impl FromStr for SortMode {
    type Err = UnknownSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "recent" => Ok(SortMode::Recent),
            "popular" => Ok(SortMode::Popular),
            "trending" => Ok(SortMode::Trending),
            _ => Err(UnknownSortMode(s.to_string())),
        }
    }
}

/// One-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Clamp `page` to at least 1 and `per_page` to `1..=MAX_PER_PAGE`.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.per_page as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

/// A window of query results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    /// Matches before pagination.
    pub total: usize,
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        (self.page as usize).saturating_mul(self.per_page as usize) < self.total
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}

/// Parameters of a feed request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortMode,
    /// Restrict to one author, compared case-insensitively.
    pub author: Option<String>,
    pub page: PageRequest,
}

impl FeedQuery {
    /// All matching observations in feed order, without pagination.
    pub fn select<'a>(
        &self,
        observations: &'a [Observation],
        now: DateTime<Utc>,
    ) -> Vec<&'a Observation> {
        let needle = self.search.trim().to_lowercase();
        let author = self.author.as_deref().map(|a| a.trim().to_lowercase());
        let mut matched: Vec<&Observation> = observations
            .iter()
            .filter(|o| self.category.matches(o.category))
            .filter(|o| written_by(o, author.as_deref()))
            .filter(|o| needle.is_empty() || o.mentions(&needle))
            .collect();
        sort_feed(&mut matched, self.sort, now);
        matched
    }

    /// Run the query and cut out the requested page.
    pub fn run<'a>(
        &self,
        observations: &'a [Observation],
        now: DateTime<Utc>,
    ) -> Page<&'a Observation> {
        let matched = self.select(observations, now);
        let total = matched.len();
        let items = matched
            .into_iter()
            .skip(self.page.offset())
            .take(self.page.per_page() as usize)
            .collect();

        Page {
            items,
            page: self.page.page(),
            per_page: self.page.per_page(),
            total,
        }
    }
}

/// `author` must already be lowercase.
fn written_by(observation: &Observation, author: Option<&str>) -> bool {
    author.is_none_or(|a| observation.author.name.to_lowercase() == a)
}

/// Order observations by `mode`, breaking ties by id.
pub fn sort_feed(observations: &mut [&Observation], mode: SortMode, now: DateTime<Utc>) {
    match mode {
        SortMode::Recent => observations.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        }),
        SortMode::Popular => observations.sort_by(|a, b| {
            b.like_count
                .cmp(&a.like_count)
                .then_with(|| a.id.cmp(&b.id))
        }),
        SortMode::Trending => {
            let mut scored: Vec<(f64, &Observation)> = observations
                .iter()
                .map(|o| (trending_score(o, now), *o))
                .collect();
            scored.sort_by(|(sa, a), (sb, b)| {
                by_score_desc(*sa, *sb).then_with(|| a.id.cmp(&b.id))
            });
            for (slot, (_, obs)) in observations.iter_mut().zip(scored) {
                *slot = obs;
            }
        }
    }
}

fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
