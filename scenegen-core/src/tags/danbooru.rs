//! Scraping tag provider: fetches listing pages in parallel and reduces the
//! per-post tags of every page to one character tag string.

use super::frequency::reduce_tag_frequencies;
use super::provider::{TagError, TagProvider};
use crate::config::TagsConfig;
use crate::config::constants::{tags, urls};
use async_trait::async_trait;
use futures::StreamExt;
use futures::stream;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct DanbooruTagProvider {
    client: Client,
    posts_url: String,
    pages: u32,
    max_workers: usize,
    fetch_retries: usize,
    retry_pause: Duration,
}

impl DanbooruTagProvider {
    pub fn new(config: &TagsConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(config.max_workers)
            .build()
            .unwrap_or_else(|error| {
                warn!(
                    ?error,
                    "Failed to build dedicated scraper client; falling back to default"
                );
                Client::new()
            });

        Self {
            client,
            posts_url: format!(
                "{}/{}",
                config.base_url.trim_end_matches('/'),
                urls::POSTS_PATH
            ),
            pages: config.pages,
            max_workers: config.max_workers.max(1),
            fetch_retries: config.fetch_retries.max(1),
            retry_pause: Duration::from_millis(tags::FETCH_RETRY_PAUSE_MS),
        }
    }

    /// Override the pause between page download attempts
    pub fn with_retry_pause(mut self, pause: Duration) -> Self {
        self.retry_pause = pause;
        self
    }

    async fn fetch_page(&self, character: &str, page: u32) -> Result<String, TagError> {
        let mut last_error = TagError::Http("no attempt made".to_string());

        for attempt in 1..=self.fetch_retries {
            let response = self
                .client
                .get(&self.posts_url)
                .query(&[("page", page.to_string()), ("tags", character.to_string())])
                .send()
                .await
                .and_then(|response| response.error_for_status());

            match response {
                Ok(response) => match response.text().await {
                    Ok(body) => return Ok(body),
                    Err(error) => last_error = error.into(),
                },
                Err(error) => last_error = error.into(),
            }

            debug!(character, page, attempt, error = %last_error, "page fetch failed");
            if attempt < self.fetch_retries {
                tokio::time::sleep(self.retry_pause).await;
            }
        }

        Err(last_error)
    }

    /// `data-tags` of every post on all pages, in page order
    pub async fn scrape_posts(&self, character: &str) -> Result<Vec<String>, TagError> {
        let workers = self.max_workers.min(self.pages.max(1) as usize);

        let mut pages: Vec<(u32, Result<String, TagError>)> = stream::iter(1..=self.pages)
            .map(|page| async move { (page, self.fetch_page(character, page).await) })
            .buffer_unordered(workers)
            .collect()
            .await;
        pages.sort_by_key(|(page, _)| *page);

        let mut posts = Vec::new();
        let mut failures = Vec::new();
        for (page, result) in pages {
            match result {
                Ok(html) => posts.extend(extract_post_tags(&html)),
                Err(error) => {
                    warn!(character, page, %error, "giving up on page");
                    failures.push(error);
                }
            }
        }

        if self.pages > 0 && failures.len() == self.pages as usize {
            return Err(failures.remove(0));
        }
        Ok(posts)
    }
}

#[async_trait]
impl TagProvider for DanbooruTagProvider {
    async fn fetch_tags(&self, character: &str) -> Result<String, TagError> {
        let posts = self.scrape_posts(character).await?;
        debug!(character, posts = posts.len(), "scraped posts");
        Ok(reduce_tag_frequencies(&posts, character))
    }

    fn name(&self) -> &'static str {
        "danbooru"
    }
}

/// Pull the `data-tags` attribute out of every post on a listing page
pub fn extract_post_tags(html: &str) -> Vec<String> {
    let selector = match Selector::parse(tags::POST_SELECTOR) {
        Ok(selector) => selector,
        Err(error) => {
            warn!(%error, "invalid post selector");
            return Vec::new();
        }
    };

    Html::parse_document(html)
        .select(&selector)
        .filter_map(|article| article.value().attr(tags::POST_TAGS_ATTR))
        .map(str::to_string)
        .collect()
}
