//! Host-facing cleanup applied to an assembled scene.

use crate::config::constants::delimiters;
use crate::scene::ScenePrompt;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static RE_COMMA_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r",+").expect("valid regex"));

/// Final `(character, character_tags, scene_prompt)` triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneOutput {
    pub character: String,
    pub character_tags: String,
    pub scene_prompt: String,
}

/// Optional caller-supplied overrides for the resolved character
#[derive(Debug, Clone, Default)]
pub struct CharacterOverrides {
    pub name: Option<String>,
    pub tags: Option<String>,
}

impl CharacterOverrides {
    /// Non-blank supplied name
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// Non-blank supplied tags
    pub fn tags(&self) -> Option<&str> {
        non_blank(self.tags.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

/// Keep only letters, digits and underscores of a character name
pub fn clean_character_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// Collapse comma runs to a single comma and strip commas at both ends
pub fn remove_duplicate_commas(text: &str) -> String {
    RE_COMMA_RUN
        .replace_all(text, ",")
        .trim_matches(',')
        .to_string()
}

/// Escape `(` and `)` in every comma-separated tag; tags are re-joined with `", "`
pub fn escape_parentheses_in_tags(tags: &str) -> String {
    tags.split(delimiters::TAG)
        .map(|tag| tag.trim().replace('(', "\\(").replace(')', "\\)"))
        .collect::<Vec<_>>()
        .join(delimiters::FRAGMENT)
}

/// Map an assembled scene onto the output contract, preferring non-blank overrides
pub fn format_scene_output(scene: &ScenePrompt, overrides: &CharacterOverrides) -> SceneOutput {
    let character = overrides.name().unwrap_or(&scene.character_id);
    let character_tags = overrides.tags().unwrap_or(&scene.character_tags);

    SceneOutput {
        character: clean_character_name(character),
        character_tags: escape_parentheses_in_tags(character_tags),
        scene_prompt: remove_duplicate_commas(&scene.prompt),
    }
}
