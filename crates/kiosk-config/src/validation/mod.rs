//! Full configuration validation.
//!
//! Each domain has its own checker; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;


use crate::schema::KioskConfig;
use kiosk_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &KioskConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_web(&mut errors, config);
    validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_web(errors: &mut Vec<String>, config: &KioskConfig) {
    match url::Url::parse(&config.web.home_url) {
        Ok(parsed) => {
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                errors.push(format!(
                    "web.home_url has unsupported scheme '{}'",
                    parsed.scheme()
                ));
            }
        }
        Err(e) => errors.push(format!("web.home_url is not an absolute URL: {e}")),
    }

    if config.web.allowed_domains.is_empty() {
        errors.push("web.allowed_domains is empty -- every link would open externally".into());
    }
    for domain in &config.web.allowed_domains {
        helpers::validate_bare_domain(errors, domain);
    }

    if config.web.user_agent.trim().is_empty() {
        errors.push("web.user_agent is empty".into());
    }
}

fn validate_window(errors: &mut Vec<String>, config: &KioskConfig) {
    let w = &config.window;
    if w.min_width == 0 || w.min_height == 0 {
        errors.push("window minimum dimensions must be positive".into());
    }
    if w.width < w.min_width {
        errors.push(format!(
            "window.width = {} is below window.min_width = {}",
            w.width, w.min_width
        ));
    }
    if w.height < w.min_height {
        errors.push(format!(
            "window.height = {} is below window.min_height = {}",
            w.height, w.min_height
        ));
    }
}
