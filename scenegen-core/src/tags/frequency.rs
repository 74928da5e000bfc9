//! Frequency-based reduction of scraped post tags to one character tag string.

use crate::config::constants::{delimiters, tags};
use indexmap::IndexMap;
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

// Group-count tags (2girls, 3boys, ...); single-person tags start with 1.
static RE_GROUP_COUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[02-9]\d*(girl|boy)s?$").expect("valid regex"));

/// Tag occurrence counts in first-seen order
#[derive(Debug, Default)]
pub struct TagCounts {
    counts: IndexMap<String, usize>,
}

impl TagCounts {
    /// Count every space-separated tag of every post
    pub fn from_posts<S: AsRef<str>>(posts: &[S]) -> Self {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for tag in posts.iter().flat_map(|post| post.as_ref().split_whitespace()) {
            *counts.entry(tag.to_string()).or_default() += 1;
        }
        Self { counts }
    }

    pub fn get(&self, tag: &str) -> usize {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    /// Tags by descending count; ties keep first-seen order
    pub fn most_common(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(tag, count)| (tag.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Reduce raw post tag strings to `character, gender?, related..., additional...`.
///
/// A tag is frequent when it appears in at least half of the posts (rounded
/// up). Related tags are frequent appearance tags, at most eight, most common
/// first. Two more of the most common tags are appended, skipping the
/// character itself and group-count tags.
pub fn reduce_tag_frequencies<S: AsRef<str>>(posts: &[S], character: &str) -> String {
    if posts.is_empty() {
        return character.to_string();
    }

    let counts = TagCounts::from_posts(posts);
    let ranked = counts.most_common();
    let threshold = posts.len().div_ceil(2);

    let gender = tags::GENDER_TAGS
        .iter()
        .copied()
        .find(|tag| counts.get(tag) >= threshold);

    let related: Vec<&str> = ranked
        .iter()
        .filter(|(tag, count)| {
            *count >= threshold
                && tags::APPEARANCE_KEYWORDS
                    .iter()
                    .any(|keyword| tag.contains(keyword))
        })
        .map(|(tag, _)| *tag)
        .take(tags::MAX_RELATED_TAGS)
        .collect();

    let additional = ranked
        .iter()
        .map(|(tag, _)| *tag)
        .filter(|tag| !related.contains(tag) && *tag != character && !RE_GROUP_COUNT.is_match(tag))
        .take(tags::MAX_ADDITIONAL_TAGS);

    let mut selected: IndexSet<&str> = IndexSet::new();
    selected.insert(character);
    selected.extend(gender);
    selected.extend(related.iter().copied());
    selected.extend(additional);

    selected
        .into_iter()
        .collect::<Vec<_>>()
        .join(delimiters::FRAGMENT)
}
