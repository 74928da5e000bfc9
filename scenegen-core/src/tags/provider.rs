//! Tag provider seam: resolves a character identifier to a descriptive tag string.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("Network error: {0}")]
    Http(String),
    #[error("Tag source returned status {0}")]
    Status(u16),
    #[error("Tag lookup timed out after {0:?}")]
    Timeout(Duration),
    #[error("Only {count} tags returned for '{character}'")]
    Insufficient { character: String, count: usize },
}

impl From<reqwest::Error> for TagError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => TagError::Status(status.as_u16()),
            None => TagError::Http(error.to_string()),
        }
    }
}

/// Source of character tags. Implementations return a comma-separated tag
/// string; acceptance, retries and timeouts are handled by the caller.
#[async_trait]
pub trait TagProvider: Send + Sync {
    async fn fetch_tags(&self, character: &str) -> Result<String, TagError>;

    fn name(&self) -> &'static str;
}

/// Canned responses keyed by character, for offline runs and tests.
/// Unknown characters resolve to an empty string.
#[derive(Debug, Clone, Default)]
pub struct StaticTagProvider {
    tags: HashMap<String, String>,
}

impl StaticTagProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, character: impl Into<String>, tags: impl Into<String>) -> Self {
        self.tags.insert(character.into(), tags.into());
        self
    }
}

#[async_trait]
impl TagProvider for StaticTagProvider {
    async fn fetch_tags(&self, character: &str) -> Result<String, TagError> {
        Ok(self.tags.get(character).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
