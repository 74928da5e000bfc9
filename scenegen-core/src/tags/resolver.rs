//! Character selection with bounded retries and a fallback tag string.

use super::provider::{TagError, TagProvider};
use crate::config::TagsConfig;
use crate::config::constants::delimiters;
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// A character identifier with its tag string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCharacter {
    pub id: String,
    pub tags: String,
    /// True when every attempt failed and `tags` is the fallback string
    pub fell_back: bool,
}

/// Number of non-blank comma-separated entries
pub fn count_tags(tags: &str) -> usize {
    tags.split(delimiters::TAG)
        .filter(|tag| !tag.trim().is_empty())
        .count()
}

pub struct TagResolver {
    provider: Arc<dyn TagProvider>,
    config: TagsConfig,
    attempt_timeout: Duration,
}

impl TagResolver {
    pub fn new(provider: Arc<dyn TagProvider>, config: TagsConfig) -> Self {
        let attempt_timeout = config.attempt_timeout();
        Self {
            provider,
            config,
            attempt_timeout,
        }
    }

    /// Override the per-attempt timeout
    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    pub fn fallback(&self) -> &str {
        &self.config.fallback
    }

    fn max_attempts(&self) -> usize {
        self.config.max_attempts.max(1)
    }

    /// One lookup: timeout, provider error and too few tags all fail the attempt
    pub async fn attempt(&self, character: &str) -> Result<String, TagError> {
        let tags = tokio::time::timeout(self.attempt_timeout, self.provider.fetch_tags(character))
            .await
            .map_err(|_| TagError::Timeout(self.attempt_timeout))??;

        let count = count_tags(&tags);
        if count < self.config.min_tags {
            return Err(TagError::Insufficient {
                character: character.to_string(),
                count,
            });
        }
        Ok(tags.trim().to_string())
    }

    /// Pick random characters, a different one per attempt while untried ones
    /// remain, until one resolves to enough tags. An empty list resolves to an
    /// empty identifier and empty tags.
    pub async fn resolve_random<R: Rng + ?Sized>(
        &self,
        characters: &[String],
        rng: &mut R,
    ) -> ResolvedCharacter {
        if characters.is_empty() {
            warn!("character list is empty");
            return ResolvedCharacter {
                id: String::new(),
                tags: String::new(),
                fell_back: false,
            };
        }

        if !self.config.enabled {
            let id = characters.choose(rng).cloned().unwrap_or_default();
            return self.fall_back(id);
        }

        let mut tried: Vec<usize> = Vec::new();
        for attempt in 1..=self.max_attempts() {
            let index = pick_untried(characters.len(), &tried, rng);
            tried.push(index);
            let character = &characters[index];
            info!(character = %character, attempt, provider = self.provider.name(), "selected character");

            match self.attempt(character).await {
                Ok(tags) => {
                    return ResolvedCharacter {
                        id: character.clone(),
                        tags,
                        fell_back: false,
                    };
                }
                Err(error) => warn!(character = %character, attempt, %error, "tag lookup failed"),
            }
        }

        let last = tried
            .last()
            .map(|index| characters[*index].clone())
            .unwrap_or_default();
        self.fall_back(last)
    }

    fn fall_back(&self, id: String) -> ResolvedCharacter {
        warn!(character = %id, fallback = %self.config.fallback, "using fallback tags");
        ResolvedCharacter {
            id,
            tags: self.config.fallback.clone(),
            fell_back: true,
        }
    }
}

fn pick_untried<R: Rng + ?Sized>(len: usize, tried: &[usize], rng: &mut R) -> usize {
    let untried: Vec<usize> = (0..len).filter(|index| !tried.contains(index)).collect();
    match untried.choose(rng) {
        Some(index) => *index,
        None => rng.gen_range(0..len),
    }
}
