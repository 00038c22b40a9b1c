mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so the configured level can seed the filter
    let load_result = match args.config.as_deref() {
        Some(path) => kiosk_config::load_config_from(std::path::Path::new(path)),
        None => kiosk_config::load_config(),
    };
    let (mut config, config_error) = match load_result {
        Ok(config) => (config, None),
        Err(e) => (kiosk_config::KioskConfig::default(), Some(e)),
    };

    // Initialize logging: CLI override wins, then the configured level
    let log_directive = args
        .log_level
        .as_deref()
        .map(|level| format!("kiosk={level}"))
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "kiosk=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Kiosk v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Some(url) = args.url {
        tracing::info!("Using home URL override: {url}");
        config.web.home_url = url;
    }

    // A home URL outside the allowlist would bounce straight to the system
    // browser; warn loudly so misconfiguration is obvious.
    let allowlist = kiosk_webview::DomainAllowlist::new(&config.web.allowed_domains);
    let home = kiosk_webview::NavigationRequest::parse(
        config.web.home_url.clone(),
        kiosk_webview::NavigationOrigin::InPage,
    );
    if let Some(host) = &home.host {
        if !allowlist.is_allowed(host) {
            tracing::warn!(
                "home URL host '{host}' is not covered by web.allowed_domains -- \
                 the home page will open in the system browser"
            );
        }
    }
    tracing::info!(
        "Config loaded (home: {}, {} allowed domains)",
        config.web.home_url,
        allowlist.len()
    );

    // Ensure platform directories exist
    if let Err(e) = kiosk_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::KioskApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
