//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Tracing filter directive for this level, scoped to the kiosk crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "kiosk=debug",
            LogLevel::Info => "kiosk=info",
            LogLevel::Warn => "kiosk=warn",
            LogLevel::Error => "kiosk=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_info() {
        assert_eq!(LoggingConfig::default().level, LogLevel::Info);
        assert_eq!(LogLevel::Info.directive(), "kiosk=info");
    }

    #[test]
    fn log_level_serialization() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let deserialized: LogLevel = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(deserialized, LogLevel::Debug);
    }

    #[test]
    fn logging_config_partial_toml() {
        let config: LoggingConfig = toml::from_str(r#"level = "error""#).unwrap();
        assert_eq!(config.level, LogLevel::Error);
        assert_eq!(config.level.directive(), "kiosk=error");
    }
}
