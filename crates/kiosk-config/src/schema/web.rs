//! Web content configuration: home URL, navigation allowlist, user agent.

use serde::{Deserialize, Serialize};

/// What the embedded surface is allowed to load and how it identifies itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Absolute URL loaded at startup and used as the retry/recovery target.
    pub home_url: String,
    /// Bare domains permitted to load in-app. A host matches a domain on
    /// equality or on a `.domain` suffix; everything else opens in the
    /// system browser.
    pub allowed_domains: Vec<String>,
    /// Custom user agent sent by the embedded surface.
    pub user_agent: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            home_url: "https://example.com".into(),
            allowed_domains: vec!["example.com".into()],
            user_agent: format!("Kiosk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
