use indexmap::IndexMap;

use crate::config::core::OrganizationProfile;

/// Organization defaults for the character prompt generator
pub struct OrganizationDefaults;

impl OrganizationDefaults {
    pub fn profiles() -> IndexMap<String, OrganizationProfile> {
        let mut profiles = IndexMap::new();
        profiles.insert(
            "lovehent".to_string(),
            OrganizationProfile {
                tags: "mdf_an,ratatatat74".to_string(),
                hiresfix_tags: "mdf_an,artist:quasarcake".to_string(),
            },
        );
        profiles.insert(
            "meitabu".to_string(),
            OrganizationProfile {
                tags: "(suyasuyabi,ratatatat74)".to_string(),
                hiresfix_tags: "(suyasuyabi,dross,(ratatatat74:0.5))".to_string(),
            },
        );
        profiles.insert(
            "project3".to_string(),
            OrganizationProfile {
                tags: "proj3 patreon".to_string(),
                hiresfix_tags: String::new(),
            },
        );
        profiles
    }
}

/// Output workspace defaults
pub struct WorkspaceDefaults;

impl WorkspaceDefaults {
    pub fn roots() -> IndexMap<String, String> {
        let mut roots = IndexMap::new();
        roots.insert(
            "lightning".to_string(),
            "/teamspace/studios/this_studio/outputParagonCreator/".to_string(),
        );
        roots.insert(
            "runpod".to_string(),
            "/workspace/outputParagonCreator/".to_string(),
        );
        roots.insert(
            "sagemaker".to_string(),
            "/workspace/sage/outputParagonCreator/".to_string(),
        );
        roots
    }
}
