//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use stargaze_core::domain::Author;
use stargaze_core::feed::DEFAULT_PER_PAGE;
use stargaze_infra::activity::DEFAULT_CAPACITY;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Starting profile identity, used for submissions and likes.
    pub current_user: Author,
    /// Contact address shown on the profile page.
    pub current_user_email: String,
    /// Fill the store with the demo observations on startup.
    pub seed_fixtures: bool,
    /// Feed page size when the client does not send `per_page`.
    pub feed_page_size: u32,
    pub activity_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            current_user: Author::new("Alex Johnson", Some("/placeholder.svg".to_string())),
            current_user_email: "alex@example.com".to_string(),
            seed_fixtures: true,
            feed_page_size: DEFAULT_PER_PAGE,
            activity_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let current_user = Author::new(
            env::var("CURRENT_USER_NAME")
                .unwrap_or(defaults.current_user.name),
            env::var("CURRENT_USER_AVATAR")
                .ok()
                .or(defaults.current_user.avatar),
        );

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT").unwrap_or(defaults.port),
            current_user,
            current_user_email: env::var("CURRENT_USER_EMAIL")
                .unwrap_or(defaults.current_user_email),
            seed_fixtures: env::var("SEED_FIXTURES")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.seed_fixtures),
            feed_page_size: parse_var("FEED_PAGE_SIZE")
                .unwrap_or(defaults.feed_page_size),
            activity_capacity: parse_var("ACTIVITY_CAPACITY")
                .unwrap_or(defaults.activity_capacity),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(var = name, value = %raw, "Ignoring unparsable environment variable");
            None
        }
    }
}
