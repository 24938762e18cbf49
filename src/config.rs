//! Process configuration for the upstream Jikan API.
//!
//! Loaded once at startup and handed to [`crate::jikan::JikanClient`];
//! nothing reads the environment after that.

use std::time::Duration;

use reqwest::Url;

use crate::error::MalError;

/// Environment variable holding the Jikan base URL (e.g. `https://api.jikan.moe/v4`).
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Budget for list, search and ranking endpoints.
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(120);

/// Budget for ID-keyed and single-entity endpoints.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub search_timeout: Duration,
    pub lookup_timeout: Duration,
}

impl Config {
    /// Build a config from an explicit base URL with default timeouts.
    pub fn new(base_url: &str) -> Result<Self, MalError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(MalError::Config(format!(
                "{} environment variable is required",
                BASE_URL_ENV
            )));
        }

        let base_url = Url::parse(trimmed)
            .map_err(|e| MalError::Config(format!("Invalid base URL '{}': {}", trimmed, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(MalError::Config(format!(
                "Base URL must be http or https, got '{}'",
                base_url.scheme()
            )));
        }

        Ok(Self {
            base_url,
            search_timeout: DEFAULT_SEARCH_TIMEOUT,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        })
    }

    /// Resolve the base URL: explicit value > `BASE_URL` env var.
    ///
    /// Fails fast when neither is set.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, MalError> {
        let base_url = match explicit {
            Some(url) => url.to_string(),
            None => std::env::var(BASE_URL_ENV).map_err(|_| {
                MalError::Config(format!("{} environment variable is required", BASE_URL_ENV))
            })?,
        };
        Self::new(&base_url)
    }

    pub fn with_timeouts(mut self, search: Duration, lookup: Duration) -> Self {
        self.search_timeout = search;
        self.lookup_timeout = lookup;
        self
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}
