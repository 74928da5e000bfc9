//! Character tag resolution.
//!
//! [`TagProvider`] is the seam to the remote tag source; [`TagResolver`]
//! adds character selection, per-attempt timeouts, retries and the fallback.

pub mod danbooru;
pub mod frequency;
pub mod provider;
pub mod resolver;

pub use danbooru::{DanbooruTagProvider, extract_post_tags};
pub use frequency::{TagCounts, reduce_tag_frequencies};
pub use provider::{StaticTagProvider, TagError, TagProvider};
pub use resolver::{ResolvedCharacter, TagResolver, count_tags};
