//! Character prompt generation: one character prompt, a scene prompt and a
//! hires-fix prompt per scene segment, and a deterministic save path.

use crate::config::CharacterConfig;
use crate::config::constants::delimiters;
use crate::prompts::normalize::normalize;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum CharacterError {
    #[error("Unknown organization '{0}'")]
    UnknownOrganization(String),
    #[error("Unknown workspace '{0}'")]
    UnknownWorkspace(String),
}

/// Kind of deliverable, used as a save path component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Comic,
    Pack,
    Extra,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Comic => "comic",
            ProjectType::Pack => "pack",
            ProjectType::Extra => "extra",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for one character prompt batch
#[derive(Debug, Clone)]
pub struct CharacterRequest {
    pub organization: String,
    pub project_type: ProjectType,
    pub workspace: String,
    pub character_name: String,
    pub character_base: String,
    pub scene_details: String,
    pub background: String,
    pub quality_tags: String,
    /// Scene segments separated by `/`
    pub prompt_scenes: String,
    /// Keep only the first N segments
    pub max_prompts: Option<usize>,
}

/// Generated prompts and save location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterPrompts {
    pub character_prompt: String,
    pub scene_prompts: Vec<String>,
    pub hiresfix_prompts: Vec<String>,
    pub save_path: String,
}

impl CharacterPrompts {
    /// Scene prompts as one newline-separated block
    pub fn scene_block(&self) -> String {
        self.scene_prompts.join("\n")
    }
}

pub struct CharacterPromptGenerator<'a> {
    config: &'a CharacterConfig,
}

impl<'a> CharacterPromptGenerator<'a> {
    pub fn new(config: &'a CharacterConfig) -> Self {
        Self { config }
    }

    pub fn generate(&self, request: &CharacterRequest) -> Result<CharacterPrompts, CharacterError> {
        let organization = self
            .config
            .organizations
            .get(&request.organization)
            .ok_or_else(|| CharacterError::UnknownOrganization(request.organization.clone()))?;
        let workspace_root = self
            .config
            .workspaces
            .get(&request.workspace)
            .ok_or_else(|| CharacterError::UnknownWorkspace(request.workspace.clone()))?;

        let save_path = format!(
            "{}{}/{}/{}",
            workspace_root,
            request.organization,
            request.project_type,
            normalize(&sanitize_path(&request.character_name))
        );

        let character_prompt = normalize(&format!(
            "[{}], {}, {}, {}",
            request.character_name, organization.tags, request.character_base, request.background
        ));

        let segments = request.prompt_scenes.split(delimiters::SEGMENT);
        let segments: Vec<&str> = match request.max_prompts {
            Some(limit) => segments.take(limit).collect(),
            None => segments.collect(),
        };

        let mut scene_prompts = Vec::new();
        let mut hiresfix_prompts = Vec::new();
        for segment in segments.into_iter().map(str::trim).filter(|s| !s.is_empty()) {
            scene_prompts.push(normalize(&format!(
                "[{}], {}, {}, {}",
                request.character_name, segment, request.scene_details, request.quality_tags
            )));

            let body = format!(
                "{}, {}, {}, {}, {}",
                request.character_base,
                segment,
                request.scene_details,
                request.background,
                request.quality_tags
            );
            let hiresfix = if organization.hiresfix_tags.is_empty() {
                body
            } else {
                format!("{}, {}", organization.hiresfix_tags, body)
            };
            hiresfix_prompts.push(normalize(&hiresfix));
        }

        Ok(CharacterPrompts {
            character_prompt,
            scene_prompts,
            hiresfix_prompts,
            save_path,
        })
    }
}

/// Spaces become underscores; anything outside `[A-Za-z0-9_-]` is dropped
pub fn sanitize_path(text: &str) -> String {
    text.replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}
