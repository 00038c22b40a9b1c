/// Configuration for creating the surface.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Initial URL to load.
    pub url: String,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Whether hosted script content runs. The bridge init script is only
    /// installed when this is on.
    pub javascript: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            url: "about:blank".to_string(),
            user_agent: None,
            devtools: cfg!(debug_assertions),
            javascript: true,
        }
    }
}

impl SurfaceConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}
