//! Application identity.

use serde::{Deserialize, Serialize};

/// Identity of the shell application: window title and bundle identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display name, used as the window title and notification source.
    pub name: String,
    /// Reverse-DNS identifier, informational.
    pub bundle_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "Kiosk".into(),
            bundle_id: "com.example.kiosk".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.name, "Kiosk");
        assert_eq!(config.bundle_id, "com.example.kiosk");
    }

    #[test]
    fn app_config_partial_toml() {
        let config: AppConfig = toml::from_str(r#"name = "My App""#).unwrap();
        assert_eq!(config.name, "My App");
        assert_eq!(config.bundle_id, "com.example.kiosk");
    }
}
