//! Window geometry configuration.

use serde::{Deserialize, Serialize};

/// Initial and minimum window dimensions in logical pixels.
///
/// The initial size is only used when no persisted frame exists or the
/// persisted frame fails validation; otherwise the previous geometry is
/// restored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            min_width: 800,
            min_height: 600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 800);
        assert_eq!(config.min_width, 800);
        assert_eq!(config.min_height, 600);
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str("width = 1600\nheight = 1000").unwrap();
        assert_eq!(config.width, 1600);
        assert_eq!(config.height, 1000);
        // Defaults preserved
        assert_eq!(config.min_width, 800);
        assert_eq!(config.min_height, 600);
    }
}
