//! Tags command - query the tag provider for one character

use crate::config::TagsConfig;
use crate::tags::{DanbooruTagProvider, TagProvider, count_tags};
use anyhow::{Context, Result};
use console::style;

/// Handle the tags command
pub async fn handle_tags_command(
    config: &TagsConfig,
    character: &str,
    pages: Option<u32>,
) -> Result<String> {
    let mut config = config.clone();
    if let Some(pages) = pages {
        config.pages = pages;
    }

    let provider = DanbooruTagProvider::new(&config);
    println!(
        "{} {} ({} pages via {})",
        style("Resolving").cyan().bold(),
        character,
        config.pages,
        provider.name()
    );

    let tags = tokio::time::timeout(config.attempt_timeout(), provider.fetch_tags(character))
        .await
        .with_context(|| format!("Tag lookup for '{character}' timed out"))?
        .with_context(|| format!("Tag lookup for '{character}' failed"))?;

    let count = count_tags(&tags);
    println!("{tags}");
    if count < config.min_tags {
        println!(
            "{} only {} tags, the scene command would retry or fall back",
            style("[WARN]").yellow().bold(),
            count
        );
    }

    Ok(tags)
}
