//! Navigation allowlist policy.
//!
//! The single source of truth for in-app vs. system-browser routing: a host
//! is allowed iff it equals a configured domain or ends with `"." + domain`.
//! The suffix is anchored on the literal dot, so `example.com.evil.com` does
//! NOT match `example.com`.

use url::Url;

// =============================================================================
// ALLOWLIST
// =============================================================================

/// The set of domains permitted to load inside the embedded surface.
/// Immutable after construction; loaded once from configuration.
#[derive(Debug, Clone)]
pub struct DomainAllowlist {
    domains: Vec<String>,
}

impl DomainAllowlist {
    /// Build an allowlist from configured domain strings. Entries are
    /// lowercased and stripped of stray leading dots; empty entries are
    /// dropped.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .map(|d| {
                d.as_ref()
                    .trim()
                    .trim_start_matches('.')
                    .to_ascii_lowercase()
            })
            .filter(|d| !d.is_empty())
            .collect();
        Self { domains }
    }

    /// Whether `host` may load in-app. Hosts arrive lowercased from URL
    /// parsing; an empty host is never allowed.
    pub fn is_allowed(&self, host: &str) -> bool {
        if host.is_empty() {
            return false;
        }
        self.domains.iter().any(|d| {
            host == d
                || host
                    .strip_suffix(d.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

// =============================================================================
// NAVIGATION DECISIONS
// =============================================================================

/// Where a navigation attempt came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOrigin {
    /// Top-level or sub-frame navigation in the existing surface.
    InPage,
    /// Request to open a new browsing context (`target="_blank"`,
    /// `window.open`). The shell is single-surface, so these never spawn a
    /// native popup regardless of the decision.
    NewWindow,
}

/// One navigation attempt, consumed immediately by [`decide`].
#[derive(Debug, Clone)]
pub struct NavigationRequest {
    pub url: String,
    pub host: Option<String>,
    pub origin: NavigationOrigin,
}

impl NavigationRequest {
    /// Build a request from a raw URL string, extracting the host if the
    /// URL has one.
    pub fn parse(url: impl Into<String>, origin: NavigationOrigin) -> Self {
        let url = url.into();
        let host = Url::parse(&url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_owned));
        Self { url, host, origin }
    }
}

/// The governor's verdict for a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the surface load the URL (for new-window requests: load it in the
    /// existing surface instead of spawning one).
    LoadInPlace,
    /// Cancel the in-app navigation and hand the URL to the system browser.
    OpenExternal,
}

/// Decide a single navigation. Stateless given the allowlist. Hostless URLs
/// (`about:`, data URIs used internally) are allowed in place.
pub fn decide(allowlist: &DomainAllowlist, request: &NavigationRequest) -> NavigationDecision {
    match &request.host {
        None => NavigationDecision::LoadInPlace,
        Some(host) if allowlist.is_allowed(host) => NavigationDecision::LoadInPlace,
        Some(_) => NavigationDecision::OpenExternal,
    }
}

// =============================================================================
// TESTS
// =============================================================================
