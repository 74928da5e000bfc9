use crate::config::constants::{tags, urls};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tag provider configuration (character tag scraping)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagsConfig {
    /// Query the remote tag source. When disabled every lookup resolves to
    /// the fallback string.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Characters tried before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    /// Minimum number of comma-separated entries for a tag string to be accepted
    #[serde(default = "default_min_tags")]
    pub min_tags: usize,

    /// Per-attempt timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Tag string used once every attempt failed
    #[serde(default = "default_fallback")]
    pub fallback: String,

    /// Listing pages fetched per character
    #[serde(default = "default_pages")]
    pub pages: u32,

    /// Maximum concurrent page fetches
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// Download attempts per page
    #[serde(default = "default_fetch_retries")]
    pub fetch_retries: usize,

    /// HTTP request timeout in seconds
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            max_attempts: default_max_attempts(),
            min_tags: default_min_tags(),
            timeout_seconds: default_timeout_seconds(),
            fallback: default_fallback(),
            pages: default_pages(),
            max_workers: default_max_workers(),
            fetch_retries: default_fetch_retries(),
            request_timeout_seconds: default_request_timeout_seconds(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl TagsConfig {
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn default_true() -> bool {
    true
}
fn default_max_attempts() -> usize {
    tags::DEFAULT_MAX_ATTEMPTS
}
fn default_min_tags() -> usize {
    tags::DEFAULT_MIN_TAGS
}
fn default_timeout_seconds() -> u64 {
    tags::DEFAULT_TIMEOUT_SECONDS
}
fn default_fallback() -> String {
    tags::DEFAULT_FALLBACK.to_string()
}
fn default_pages() -> u32 {
    tags::DEFAULT_PAGES
}
fn default_max_workers() -> usize {
    tags::DEFAULT_MAX_WORKERS
}
fn default_fetch_retries() -> usize {
    tags::DEFAULT_FETCH_RETRIES
}
fn default_request_timeout_seconds() -> u64 {
    tags::DEFAULT_REQUEST_TIMEOUT_SECONDS
}
fn default_base_url() -> String {
    urls::DANBOORU_BASE.to_string()
}
fn default_user_agent() -> String {
    tags::DEFAULT_USER_AGENT.to_string()
}
