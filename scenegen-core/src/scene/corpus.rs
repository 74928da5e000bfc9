//! Corpus and clothing document loading.

use crate::config::ResourcesConfig;
use crate::config::constants::delimiters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("Required {kind} not found: {path}")]
    Missing { kind: ResourceKind, path: PathBuf },
    #[error("Failed to read {kind} at {path}: {source}")]
    Unreadable {
        kind: ResourceKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid clothing configuration at {path}: {source}")]
    InvalidClothing {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Fragment at {path}:{line} contains the segment delimiter '/'")]
    DelimiterInFragment { path: PathBuf, line: usize },
    #[error("Clothing fragment '{fragment}' in {path} contains the segment delimiter '/'")]
    DelimiterInClothing { path: PathBuf, fragment: String },
}

/// Every file the scene assembler depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Corpus(CorpusRole),
    Clothing,
    Characters,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Corpus(role) => write!(f, "{role} corpus"),
            ResourceKind::Clothing => f.write_str("clothing configuration"),
            ResourceKind::Characters => f.write_str("character list"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorpusRole {
    Opening,
    Middle,
    Closing,
}

impl CorpusRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorpusRole::Opening => "opening",
            CorpusRole::Middle => "middle",
            CorpusRole::Closing => "closing",
        }
    }
}

impl fmt::Display for CorpusRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, immutable fragment lines for one prompt section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    role: CorpusRole,
    lines: Vec<String>,
}

impl Corpus {
    pub fn new(role: CorpusRole, lines: Vec<String>) -> Self {
        Self { role, lines }
    }

    pub fn role(&self) -> CorpusRole {
        self.role
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Color and clothing pools for the shared outfit phrase
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OpeningClothing {
    pub colors: Vec<String>,
    pub clothing: Vec<String>,
}

/// Alternative item pools for the early and late middle lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MiddleClothing {
    pub part1: Vec<String>,
    pub part2: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClosingClothing {
    pub tag: String,
}

/// Typed clothing document. `start`, `Mid` and `end` are accepted as
/// section names too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClothingConfig {
    #[serde(alias = "start")]
    pub opening: OpeningClothing,
    #[serde(alias = "Mid", alias = "mid")]
    pub middle: MiddleClothing,
    #[serde(alias = "end")]
    pub closing: ClosingClothing,
}

impl ClothingConfig {
    fn fragments(&self) -> impl Iterator<Item = &str> {
        self.opening
            .colors
            .iter()
            .chain(&self.opening.clothing)
            .chain(&self.middle.part1)
            .chain(&self.middle.part2)
            .map(String::as_str)
            .chain(std::iter::once(self.closing.tag.as_str()))
    }
}

/// Trimmed, non-blank lines in file order
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn read(kind: ResourceKind, path: &Path) -> Result<String, ResourceError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ResourceError::Missing {
                kind,
                path: path.to_path_buf(),
            }
        } else {
            ResourceError::Unreadable {
                kind,
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Load a corpus file; fragments may not contain the segment delimiter
pub fn load_corpus(role: CorpusRole, path: &Path) -> Result<Corpus, ResourceError> {
    let content = read(ResourceKind::Corpus(role), path)?;

    let mut lines = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line.contains(delimiters::SEGMENT) {
            return Err(ResourceError::DelimiterInFragment {
                path: path.to_path_buf(),
                line: index + 1,
            });
        }
        lines.push(line.to_string());
    }

    debug!(role = %role, lines = lines.len(), path = %path.display(), "loaded corpus");
    Ok(Corpus::new(role, lines))
}

/// Parse the clothing document, failing on a missing section or a fragment
/// containing the segment delimiter
pub fn load_clothing_config(path: &Path) -> Result<ClothingConfig, ResourceError> {
    let content = read(ResourceKind::Clothing, path)?;
    let config: ClothingConfig =
        serde_json::from_str(&content).map_err(|source| ResourceError::InvalidClothing {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(fragment) = config
        .fragments()
        .find(|fragment| fragment.contains(delimiters::SEGMENT))
    {
        return Err(ResourceError::DelimiterInClothing {
            path: path.to_path_buf(),
            fragment: fragment.to_string(),
        });
    }

    Ok(config)
}

/// Load the character identifier list
pub fn load_characters(path: &Path) -> Result<Vec<String>, ResourceError> {
    let content = read(ResourceKind::Characters, path)?;
    Ok(parse_lines(&content))
}

/// Everything the assembler reads, loaded once and shared read-only
#[derive(Debug, Clone)]
pub struct SceneResources {
    pub opening: Corpus,
    pub middle: Corpus,
    pub closing: Corpus,
    pub clothing: ClothingConfig,
    pub characters: Vec<String>,
}

impl SceneResources {
    /// Check every resource exists before reading any of them, then load.
    pub fn load(config: &ResourcesConfig) -> Result<Self, ResourceError> {
        let sources = [
            (
                ResourceKind::Corpus(CorpusRole::Opening),
                config.opening_path(),
            ),
            (ResourceKind::Corpus(CorpusRole::Middle), config.middle_path()),
            (
                ResourceKind::Corpus(CorpusRole::Closing),
                config.closing_path(),
            ),
            (ResourceKind::Clothing, config.clothing_path()),
            (ResourceKind::Characters, config.characters_path()),
        ];
        for (kind, path) in &sources {
            if !path.exists() {
                return Err(ResourceError::Missing {
                    kind: *kind,
                    path: path.clone(),
                });
            }
        }

        Ok(Self {
            opening: load_corpus(CorpusRole::Opening, &config.opening_path())?,
            middle: load_corpus(CorpusRole::Middle, &config.middle_path())?,
            closing: load_corpus(CorpusRole::Closing, &config.closing_path())?,
            clothing: load_clothing_config(&config.clothing_path())?,
            characters: load_characters(&config.characters_path())?,
        })
    }
}
