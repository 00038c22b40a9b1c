//! Load-failure taxonomy and the locally rendered fallback page.
//!
//! Failures are classified by coarse category, not raw error string. The
//! `Cancelled` category covers navigations the governor itself cancelled
//! when routing a URL to the system browser -- those are suppressed and
//! never rendered.

// =============================================================================
// TAXONOMY
// =============================================================================

/// Coarse category of a failed page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    /// The machine has no network connectivity at all.
    NoConnectivity,
    /// The load did not complete within the deadline.
    Timeout,
    /// DNS failure or connection refusal for this specific host.
    HostUnreachable,
    /// TLS handshake or certificate failure.
    SecureConnectionFailed,
    /// The navigation was intentionally cancelled (allowlist redirect to the
    /// system browser). Not a user-visible error.
    Cancelled,
    /// Anything else.
    Other,
}

impl LoadFailure {
    /// Whether this failure produces a fallback page. Only `Cancelled` is
    /// suppressed.
    pub fn is_presentable(&self) -> bool {
        !matches!(self, LoadFailure::Cancelled)
    }

    pub fn title(&self) -> &'static str {
        match self {
            LoadFailure::NoConnectivity => "You're offline",
            LoadFailure::Timeout => "The page took too long to load",
            LoadFailure::HostUnreachable => "Can't reach the server",
            LoadFailure::SecureConnectionFailed => "Secure connection failed",
            LoadFailure::Cancelled => "",
            LoadFailure::Other => "Something went wrong",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            LoadFailure::NoConnectivity => {
                "Check your network connection. The page will reload automatically \
                 when the connection comes back."
            }
            LoadFailure::Timeout => {
                "The server did not respond in time. It may be overloaded or \
                 temporarily unavailable."
            }
            LoadFailure::HostUnreachable => {
                "The server could not be found or refused the connection."
            }
            LoadFailure::SecureConnectionFailed => {
                "A secure connection could not be established. The site's \
                 certificate may be invalid."
            }
            LoadFailure::Cancelled => "",
            LoadFailure::Other => "The page could not be loaded.",
        }
    }
}

// =============================================================================
// RENDERING
// =============================================================================

/// Render the self-contained fallback document for a failure, or `None` for
/// suppressed categories. The retry button re-attempts `retry_url` (the
/// failed navigation, or the home URL as the default recovery target).
pub fn render_error_page(failure: LoadFailure, retry_url: &str) -> Option<String> {
    if !failure.is_presentable() {
        return None;
    }

    // The URL is embedded as a JSON string literal inside a script block;
    // escaping "</" keeps a hostile URL from terminating the block early.
    let retry = serde_json::to_string(retry_url)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/");
    let title = failure.title();
    let message = failure.message();

    Some(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  :root {{ color-scheme: light dark; }}
  body {{
    margin: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    min-height: 100vh;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    background: #f5f5f7;
    color: #1d1d1f;
  }}
  @media (prefers-color-scheme: dark) {{
    body {{ background: #1e1e1e; color: #f0f0f0; }}
  }}
  main {{ max-width: 26em; padding: 2em; text-align: center; }}
  h1 {{ font-size: 1.4em; }}
  p {{ opacity: 0.75; line-height: 1.5; }}
  button {{
    margin-top: 1em;
    padding: 0.5em 1.4em;
    font-size: 1em;
    border-radius: 6px;
    border: 1px solid currentColor;
    background: transparent;
    color: inherit;
    cursor: pointer;
  }}
</style>
</head>
<body>
<main>
  <h1>{title}</h1>
  <p>{message}</p>
  <button id="retry">Try Again</button>
</main>
<script>
  var RETRY_URL = {retry};
  document.getElementById("retry").addEventListener("click", function () {{
    location.replace(RETRY_URL);
  }});
</script>
</body>
</html>
"#
    ))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PRESENTABLE: &[LoadFailure] = &[
        LoadFailure::NoConnectivity,
        LoadFailure::Timeout,
        LoadFailure::HostUnreachable,
        LoadFailure::SecureConnectionFailed,
        LoadFailure::Other,
    ];

    #[test]
    fn cancelled_is_suppressed() {
        assert!(!LoadFailure::Cancelled.is_presentable());
        assert!(render_error_page(LoadFailure::Cancelled, "https://example.com").is_none());
    }

    #[test]
    fn every_other_category_renders_a_page() {
        for failure in PRESENTABLE {
            let page = render_error_page(*failure, "https://example.com");
            assert!(page.is_some(), "{failure:?} should render");
        }
    }

    #[test]
    fn page_carries_category_title_and_message() {
        for failure in PRESENTABLE {
            let page = render_error_page(*failure, "https://example.com").unwrap();
            assert!(page.contains(failure.title()), "{failure:?} missing title");
            assert!(
                page.contains(failure.message()),
                "{failure:?} missing message"
            );
        }
    }

    #[test]
    fn categories_have_distinct_titles() {
        let mut titles: Vec<&str> = PRESENTABLE.iter().map(|f| f.title()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), PRESENTABLE.len());
    }

    #[test]
    fn retry_button_targets_the_failed_url() {
        let page = render_error_page(LoadFailure::Timeout, "https://example.com/app").unwrap();
        assert!(page.contains(r#"var RETRY_URL = "https://example.com/app";"#));
        assert!(page.contains("location.replace(RETRY_URL)"));
    }

    #[test]
    fn retry_url_cannot_escape_the_script_literal() {
        let hostile = r#"https://x/"</script><script>alert(1)"#;
        let page = render_error_page(LoadFailure::Other, hostile).unwrap();
        assert!(!page.contains("</script><script>"));
        assert!(page.contains(r#"<\/script>"#));
    }

    #[test]
    fn page_is_self_contained() {
        let page = render_error_page(LoadFailure::HostUnreachable, "https://example.com").unwrap();
        assert!(!page.contains("src="));
        assert!(!page.contains("href="));
    }
}
