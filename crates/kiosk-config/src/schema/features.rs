//! Feature flags.

use serde::{Deserialize, Serialize};

/// Toggles for the embedded surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Whether hosted script content runs at all. The native bridge is only
    /// installed when this is on.
    pub javascript: bool,
    /// Whether the webview inspector is available. Defaults to on in debug
    /// builds only.
    pub devtools: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            javascript: true,
            devtools: cfg!(debug_assertions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn javascript_on_by_default() {
        assert!(FeatureConfig::default().javascript);
    }

    #[test]
    fn feature_config_partial_toml() {
        let config: FeatureConfig = toml::from_str("javascript = false").unwrap();
        assert!(!config.javascript);
    }

    #[test]
    fn devtools_can_be_forced_on() {
        let config: FeatureConfig = toml::from_str("devtools = true").unwrap();
        assert!(config.devtools);
    }
}
