use crate::config::constants::config_files;
use crate::config::core::{CharacterConfig, ResourcesConfig, SamplingConfig, TagsConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for scenegen
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScenegenConfig {
    /// Corpus, clothing and character list locations
    #[serde(default)]
    pub resources: ResourcesConfig,

    /// Corpus sampling strategy
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Character tag resolution
    #[serde(default)]
    pub tags: TagsConfig,

    /// Organization and workspace tables for character prompts
    #[serde(default)]
    pub character: CharacterConfig,
}

impl ScenegenConfig {
    /// Built-in defaults with resources resolved against `root`
    pub fn rooted_defaults(root: &Path) -> Self {
        let mut config = Self::default();
        config.resources.rooted_at(root);
        config
    }

    /// Write a default scenegen.toml into the workspace.
    /// Returns the created file names; an existing file is kept unless `force`.
    pub fn bootstrap_project<P: AsRef<Path>>(workspace: P, force: bool) -> Result<Vec<String>> {
        let workspace = workspace.as_ref();
        let mut created_files = Vec::new();

        let config_path = workspace.join(config_files::FILE_NAME);
        if !config_path.exists() || force {
            Self::create_sample_config(&config_path)?;
            created_files.push(config_files::FILE_NAME.to_string());
        }

        Ok(created_files)
    }

    /// Create sample configuration file
    pub fn create_sample_config<P: AsRef<Path>>(output: P) -> Result<()> {
        let output = output.as_ref();
        let default_config = ScenegenConfig::default();
        let config_content = toml::to_string_pretty(&default_config)
            .context("Failed to serialize default configuration")?;

        fs::write(output, config_content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(())
    }
}

/// Configuration manager for locating and loading scenegen.toml
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: ScenegenConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Get the user's home directory path
    fn get_home_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home));
        }

        if let Ok(userprofile) = std::env::var("USERPROFILE") {
            return Some(PathBuf::from(userprofile));
        }

        dirs::home_dir()
    }

    /// Load configuration from a specific workspace.
    ///
    /// Lookup order: `<workspace>/scenegen.toml`, `<workspace>/.scenegen/scenegen.toml`,
    /// `~/.scenegen/scenegen.toml`. Without any file the defaults apply and
    /// resources resolve against the workspace.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_home(workspace.as_ref(), Self::get_home_dir().as_deref())
    }

    /// Workspace lookup with an explicit home directory; `None` skips the
    /// user-level file
    pub fn load_with_home(workspace: &Path, home_dir: Option<&Path>) -> Result<Self> {
        let mut candidates = vec![
            workspace.join(config_files::FILE_NAME),
            workspace
                .join(config_files::DOT_DIR)
                .join(config_files::FILE_NAME),
        ];
        if let Some(home_dir) = home_dir {
            candidates.push(
                home_dir
                    .join(config_files::DOT_DIR)
                    .join(config_files::FILE_NAME),
            );
        }

        if let Some(path) = candidates.iter().find(|path| path.exists()) {
            return Self::load_from_file(path);
        }

        Ok(Self {
            config: ScenegenConfig::rooted_defaults(workspace),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: ScenegenConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        let root = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        config.resources.rooted_at(&root);

        tracing::debug!(path = %path.display(), "loaded configuration");

        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &ScenegenConfig {
        &self.config
    }

    /// Consume the manager, keeping the configuration
    pub fn into_config(self) -> ScenegenConfig {
        self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::core::SamplingMode;
    use tempfile::TempDir;

    #[test]
    fn defaults_resolve_resources_against_workspace() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::load_with_home(temp_dir.path(), None).unwrap();

        assert!(manager.config_path().is_none());
        assert_eq!(
            manager.config().resources.opening_path(),
            temp_dir.path().join("files").join("start.txt")
        );
        assert_eq!(manager.config().tags.max_attempts, 3);
        assert_eq!(manager.config().tags.fallback, "character");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scenegen.toml");
        fs::write(
            &path,
            "[resources]\nbase_dir = \"corpora\"\n\n[sampling]\nmode = \"chunked\"\n\n[tags]\nmax_attempts = 5\n",
        )
        .unwrap();

        let manager = ConfigManager::load_with_home(temp_dir.path(), None).unwrap();
        let config = manager.config();

        assert_eq!(manager.config_path(), Some(path.as_path()));
        assert_eq!(config.sampling.mode, SamplingMode::Chunked);
        assert_eq!(config.tags.max_attempts, 5);
        assert_eq!(config.tags.min_tags, 4);
        assert_eq!(
            config.resources.characters_path(),
            temp_dir.path().join("corpora").join("characters.txt")
        );
        assert!(config.character.organizations.contains_key("meitabu"));
    }

    #[test]
    fn dot_directory_is_searched() {
        let temp_dir = TempDir::new().unwrap();
        let dot_dir = temp_dir.path().join(".scenegen");
        fs::create_dir_all(&dot_dir).unwrap();
        fs::write(dot_dir.join("scenegen.toml"), "[tags]\nenabled = false\n").unwrap();

        let manager = ConfigManager::load_with_home(temp_dir.path(), None).unwrap();
        assert!(!manager.config().tags.enabled);
        assert_eq!(
            manager.config().resources.base_dir,
            dot_dir.join("files")
        );
    }

    #[test]
    fn home_file_is_used_after_workspace_candidates() {
        let workspace = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let home_config = home.path().join(".scenegen");
        fs::create_dir_all(&home_config).unwrap();
        fs::write(home_config.join("scenegen.toml"), "[tags]\nfallback = \"home\"\n").unwrap();

        let from_home = ConfigManager::load_with_home(workspace.path(), Some(home.path())).unwrap();
        assert_eq!(from_home.config().tags.fallback, "home");

        let without_home = ConfigManager::load_with_home(workspace.path(), None).unwrap();
        assert_eq!(without_home.config().tags.fallback, "character");
        assert!(without_home.config_path().is_none());

        fs::write(workspace.path().join("scenegen.toml"), "[tags]\nfallback = \"local\"\n").unwrap();
        let local = ConfigManager::load_with_home(workspace.path(), Some(home.path())).unwrap();
        assert_eq!(local.config().tags.fallback, "local");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scenegen.toml");
        fs::write(&path, "[tags\nmax_attempts = ").unwrap();

        let error = ConfigManager::load_from_file(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn bootstrap_writes_loadable_config() {
        let temp_dir = TempDir::new().unwrap();

        let created = ScenegenConfig::bootstrap_project(temp_dir.path(), false).unwrap();
        assert_eq!(created, vec!["scenegen.toml".to_string()]);

        let again = ScenegenConfig::bootstrap_project(temp_dir.path(), false).unwrap();
        assert!(again.is_empty());

        let manager = ConfigManager::load_from_file(temp_dir.path().join("scenegen.toml")).unwrap();
        assert_eq!(manager.config().character.workspaces.len(), 3);
    }
}
