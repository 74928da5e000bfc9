use crate::config::defaults::{OrganizationDefaults, WorkspaceDefaults};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Tags injected for one organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OrganizationProfile {
    /// Added to the character prompt
    #[serde(default)]
    pub tags: String,

    /// Leads every hires-fix prompt; empty means none
    #[serde(default)]
    pub hiresfix_tags: String,
}

/// Static lookup tables for the character prompt generator
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CharacterConfig {
    #[serde(default = "OrganizationDefaults::profiles")]
    pub organizations: IndexMap<String, OrganizationProfile>,

    /// Output root per workspace, joined verbatim with the save path
    #[serde(default = "WorkspaceDefaults::roots")]
    pub workspaces: IndexMap<String, String>,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            organizations: OrganizationDefaults::profiles(),
            workspaces: WorkspaceDefaults::roots(),
        }
    }
}
