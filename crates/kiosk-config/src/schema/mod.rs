//! Configuration schema: all sections with serde defaults.

mod app;
mod features;
mod logging;
mod web;
mod window;

pub use app::AppConfig;
pub use features::FeatureConfig;
pub use logging::{LogLevel, LoggingConfig};
pub use web::WebConfig;
pub use window::WindowConfig;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Top-level configuration for the shell.
///
/// Every section has its own defaults, so any subset of the TOML file can be
/// omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KioskConfig {
    pub app: AppConfig,
    pub web: WebConfig,
    pub window: WindowConfig,
    pub features: FeatureConfig,
    pub logging: LoggingConfig,
}
