//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Kiosk Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[app]
# name = "Kiosk"
# bundle_id = "com.example.kiosk"

[web]
# The page loaded at startup. Must be an absolute http(s) URL.
home_url = "https://example.com"
# Domains allowed to load inside the app window. A host matches on equality
# or on a ".domain" suffix (sub.example.com matches example.com). Links to
# any other domain open in the system browser instead.
allowed_domains = ["example.com"]
# user_agent = "Kiosk/0.1.0"

[window]
# width = 1200
# height = 800
# min_width = 800
# min_height = 600

[features]
# javascript = true
# devtools = false       # defaults to true in debug builds

[logging]
# level = "info"         # debug, info, warn, error
"##
    .to_string()
}
