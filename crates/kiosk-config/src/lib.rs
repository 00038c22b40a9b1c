//! Kiosk configuration system.
//!
//! TOML-based configuration for the shell: home URL, navigation allowlist,
//! window geometry, and feature flags. All sections use sensible defaults so
//! partial configs work out of the box. The config is loaded once at startup
//! and is immutable for the lifetime of the process.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{KioskConfig, CONFIG_SCHEMA_VERSION};

use kiosk_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Loads `config.toml` from the OS config directory, creating a commented
/// default file if none exists.
pub fn load_config() -> Result<KioskConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &std::path::Path) -> Result<KioskConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_validation() {
        let config = KioskConfig::default();
        assert!(validation::validate(&config).is_ok());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = KioskConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: KioskConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.web.home_url, config.web.home_url);
        assert_eq!(parsed.web.allowed_domains, config.web.allowed_domains);
        assert_eq!(parsed.window.width, config.window.width);
    }
}
