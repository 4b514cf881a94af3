use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of astronomical event an observation records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Meteor,
    Satellite,
    Galaxy,
    Nebula,
    Planet,
    Aurora,
    Comet,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 8] = [
        Category::Meteor,
        Category::Satellite,
        Category::Galaxy,
        Category::Nebula,
        Category::Planet,
        Category::Aurora,
        Category::Comet,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Meteor => "Meteor",
            Category::Satellite => "Satellite",
            Category::Galaxy => "Galaxy",
            Category::Nebula => "Nebula",
            Category::Planet => "Planet",
            Category::Aurora => "Aurora",
            Category::Comet => "Comet",
            Category::Other => "Other",
        }
    }

    /// Badge tone used when rendering the category.
    ///
    /// Categories without a dedicated tone share the `Other` badge.
    pub fn badge(self) -> BadgeTone {
        match self {
            Category::Meteor => BadgeTone::Orange,
            Category::Satellite => BadgeTone::Blue,
            Category::Galaxy => BadgeTone::Purple,
            Category::Nebula => BadgeTone::Pink,
            Category::Planet => BadgeTone::Green,
            Category::Aurora | Category::Comet | Category::Other => BadgeTone::Gray,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parse a category name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownCategory(name.to_string()))
    }
}

/// Display tone of a category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Orange,
    Blue,
    Purple,
    Pink,
    Green,
    Gray,
}

impl BadgeTone {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeTone::Orange => "orange",
            BadgeTone::Blue => "blue",
            BadgeTone::Purple => "purple",
            BadgeTone::Pink => "pink",
            BadgeTone::Green => "green",
            BadgeTone::Gray => "gray",
        }
    }
}
