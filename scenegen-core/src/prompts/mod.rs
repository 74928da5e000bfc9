//! Prompt text utilities: normalization, host-facing formatting and the
//! character prompt generator.

pub mod character;
pub mod format;
pub mod normalize;

pub use character::{
    CharacterError, CharacterPromptGenerator, CharacterPrompts, CharacterRequest, ProjectType,
    sanitize_path,
};
pub use format::{
    CharacterOverrides, SceneOutput, clean_character_name, escape_parentheses_in_tags,
    format_scene_output, remove_duplicate_commas,
};
pub use normalize::normalize;
