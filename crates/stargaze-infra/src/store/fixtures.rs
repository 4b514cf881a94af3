//! Seed observations and profile for a fresh store.
//!
//! Post times are given relative to `now` so the feed always looks live.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use stargaze_core::domain::{Author, Category, Observation, Profile};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

const OWNER_BIO: &str = "Amateur astronomer and astrophotographer chasing deep sky objects.";

struct Seed {
    id: u128,
    title: &'static str,
    description: &'static str,
    category: Category,
    location: &'static str,
    age: Duration,
    likes: u32,
    comments: u32,
    liked: bool,
}

impl Seed {
    fn build(self, author: Author, now: DateTime<Utc>) -> Observation {
        let posted = now - self.age;
        Observation {
            id: Uuid::from_u128(self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            image: Some(PLACEHOLDER_IMAGE.to_string()),
            category: self.category,
            location: Some(self.location.to_string()),
            observed_at: None,
            author,
            like_count: self.likes,
            comment_count: self.comments,
            liked_by_current_user: self.liked,
            created_at: posted,
            updated_at: posted,
        }
    }
}

fn member(name: &str) -> Author {
    Author::new(name, Some(PLACEHOLDER_IMAGE.to_string()))
}

/// The five community observations.
pub fn community(now: DateTime<Utc>) -> Vec<Observation> {
    vec![
        Seed {
            id: 1,
            title: "Incredible Meteor Shower Over Colorado",
            description: "Witnessed an amazing Perseid meteor shower last night with over 60 meteors per hour. The sky was crystal clear and the show was absolutely spectacular! Best viewing was around 2-4 AM local time.",
            category: Category::Meteor,
            location: "Colorado, USA",
            age: Duration::hours(2),
            likes: 24,
            comments: 8,
            liked: false,
        }
        .build(member("Sarah Chen"), now),
        Seed {
            id: 2,
            title: "ISS Transit Across the Moon",
            description: "Captured this incredible shot of the International Space Station transiting across the lunar surface. Perfect timing and weather conditions made this shot possible.",
            category: Category::Satellite,
            location: "Arizona, USA",
            age: Duration::hours(5),
            likes: 67,
            comments: 15,
            liked: true,
        }
        .build(member("Mike Rodriguez"), now),
        Seed {
            id: 3,
            title: "Stunning Andromeda Galaxy Capture",
            description: "3-hour exposure of the Andromeda Galaxy using my 8-inch telescope. You can clearly see the spiral arms and dust lanes in this shot.",
            category: Category::Galaxy,
            location: "Oregon, USA",
            age: Duration::days(1),
            likes: 89,
            comments: 23,
            liked: false,
        }
        .build(member("Emma Thompson"), now),
        Seed {
            id: 4,
            title: "Northern Lights Display in Alaska",
            description: "Spectacular aurora borealis display with vibrant greens and purples dancing across the sky. The geomagnetic activity was incredibly strong tonight.",
            category: Category::Aurora,
            location: "Fairbanks, Alaska",
            age: Duration::days(2),
            likes: 156,
            comments: 34,
            liked: false,
        }
        .build(member("James Wilson"), now),
        Seed {
            id: 5,
            title: "Jupiter and the Galilean Satellites",
            description: "Beautiful alignment of Jupiter with its four Galilean satellites clearly visible through my 6-inch reflector telescope. Io, Europa, Ganymede, and Callisto all in view.",
            category: Category::Planet,
            location: "Texas, USA",
            age: Duration::days(3),
            likes: 43,
            comments: 12,
            liked: true,
        }
        .build(member("Lisa Park"), now),
    ]
}

/// Observations shared by the profile owner.
pub fn profile(author: &Author, now: DateTime<Utc>) -> Vec<Observation> {
    vec![
        Seed {
            id: 101,
            title: "Orion Nebula Through My 8-inch Telescope",
            description: "Captured this stunning view of M42 during last night's clear skies. 30-minute exposure with my DSLR.",
            category: Category::Nebula,
            location: "Colorado, USA",
            age: Duration::days(3),
            likes: 45,
            comments: 12,
            liked: false,
        }
        .build(author.clone(), now),
        Seed {
            id: 102,
            title: "Saturn's Rings in Detail",
            description: "Amazing detail visible in Saturn's ring system tonight. The Cassini division is clearly visible.",
            category: Category::Planet,
            location: "Colorado, USA",
            age: Duration::weeks(1),
            likes: 78,
            comments: 23,
            liked: false,
        }
        .build(author.clone(), now),
    ]
}

/// The profile owner's details as shown on the profile page.
pub fn owner_profile(author: Author, email: &str, now: DateTime<Utc>) -> Profile {
    let mut profile = Profile::new(author, email, now - Duration::days(540));
    profile.location = Some("Colorado, USA".to_string());
    profile.bio = Some(OWNER_BIO.to_string());
    profile
}

/// Community and profile observations together.
pub fn all(profile_owner: &Author, now: DateTime<Utc>) -> Vec<Observation> {
    let mut observations = community(now);
    observations.extend(profile(profile_owner, now));
    observations
}
