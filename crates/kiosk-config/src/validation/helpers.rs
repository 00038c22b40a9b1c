//! Shared validation helpers.

/// Push an error unless `domain` is a plausible bare hostname: non-empty, no
/// scheme, no path separator, no whitespace, no leading/trailing dot.
pub(crate) fn validate_bare_domain(errors: &mut Vec<String>, domain: &str) {
    if domain.is_empty() {
        errors.push("web.allowed_domains contains an empty entry".into());
        return;
    }
    if domain.contains("://") {
        errors.push(format!(
            "web.allowed_domains entry '{domain}' must be a bare domain, not a URL"
        ));
        return;
    }
    if domain.contains('/') || domain.chars().any(char::is_whitespace) {
        errors.push(format!(
            "web.allowed_domains entry '{domain}' contains invalid characters"
        ));
        return;
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        errors.push(format!(
            "web.allowed_domains entry '{domain}' must not start or end with a dot"
        ));
    }
}
