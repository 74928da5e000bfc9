//! Scenegen Configuration Module
//!
//! This module handles loading and managing configuration from scenegen.toml files.
//! It centralizes resource locations, the sampling strategy, tag provider
//! settings and the static organization/workspace tables.

pub mod constants;
pub mod core;
pub mod defaults;
pub mod loader;

pub use core::{
    CharacterConfig, OrganizationProfile, ResourcesConfig, SamplingConfig, SamplingMode,
    TagsConfig,
};
pub use defaults::{OrganizationDefaults, WorkspaceDefaults};
pub use loader::{ConfigManager, ScenegenConfig};
