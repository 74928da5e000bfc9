use crate::config::constants::resources;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Locations of the corpora, the clothing document and the character list
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourcesConfig {
    /// Directory holding every resource file. Relative paths resolve against
    /// the directory of the configuration file (or the workspace).
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Opening fragments, one per line
    #[serde(default = "default_opening")]
    pub opening: PathBuf,

    /// Middle fragments, one per line
    #[serde(default = "default_middle")]
    pub middle: PathBuf,

    /// Closing fragments, one per line
    #[serde(default = "default_closing")]
    pub closing: PathBuf,

    /// Clothing configuration document (JSON)
    #[serde(default = "default_clothing")]
    pub clothing: PathBuf,

    /// Character identifiers, one per line
    #[serde(default = "default_characters")]
    pub characters: PathBuf,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            opening: default_opening(),
            middle: default_middle(),
            closing: default_closing(),
            clothing: default_clothing(),
            characters: default_characters(),
        }
    }
}

impl ResourcesConfig {
    /// Anchor a relative `base_dir` at `root`
    pub fn rooted_at(&mut self, root: &Path) {
        if self.base_dir.is_relative() {
            self.base_dir = root.join(&self.base_dir);
        }
    }

    pub fn opening_path(&self) -> PathBuf {
        self.base_dir.join(&self.opening)
    }

    pub fn middle_path(&self) -> PathBuf {
        self.base_dir.join(&self.middle)
    }

    pub fn closing_path(&self) -> PathBuf {
        self.base_dir.join(&self.closing)
    }

    pub fn clothing_path(&self) -> PathBuf {
        self.base_dir.join(&self.clothing)
    }

    pub fn characters_path(&self) -> PathBuf {
        self.base_dir.join(&self.characters)
    }
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(resources::DEFAULT_BASE_DIR)
}
fn default_opening() -> PathBuf {
    PathBuf::from(resources::OPENING_CORPUS)
}
fn default_middle() -> PathBuf {
    PathBuf::from(resources::MIDDLE_CORPUS)
}
fn default_closing() -> PathBuf {
    PathBuf::from(resources::CLOSING_CORPUS)
}
fn default_clothing() -> PathBuf {
    PathBuf::from(resources::CLOTHING_CONFIG)
}
fn default_characters() -> PathBuf {
    PathBuf::from(resources::CHARACTER_LIST)
}
