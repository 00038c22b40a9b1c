use wry::WebView;

use crate::bridge::js_deliver_response;

/// Handle to the managed surface. Provides the navigation and scripting
/// operations the shell needs, with best-effort tracking of the current URL
/// so `reload` follows link navigation.
pub struct WebViewHandle {
    webview: WebView,
    current_url: String,
    current_title: String,
}

impl WebViewHandle {
    pub(super) fn new(webview: WebView, initial_url: String) -> Self {
        Self {
            webview,
            current_url: initial_url,
            current_title: String::new(),
        }
    }

    /// Get the current URL.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Update the tracked URL for an allowed navigation the engine is
    /// performing itself (link click, redirect).
    pub fn track_navigation(&mut self, url: String) {
        self.current_url = url;
    }

    /// Get the current title.
    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    /// Update the tracked title.
    pub fn set_title(&mut self, title: String) {
        self.current_title = title;
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.current_url = url.to_string();
        self.webview.load_url(url)
    }

    /// Render a local document (the load-failure fallback page) without
    /// disturbing the tracked URL, so `reload` re-attempts the page the
    /// fallback replaced.
    pub fn show_fallback(&self, html: &str) -> Result<(), wry::Error> {
        self.webview.load_html(html)
    }

    /// Re-load the tracked current URL.
    pub fn reload(&mut self) -> Result<(), wry::Error> {
        let url = self.current_url.clone();
        self.webview.load_url(&url)
    }

    /// Go back one history entry. No-op when there is no back history.
    pub fn go_back(&self) -> Result<(), wry::Error> {
        self.webview.evaluate_script("window.history.back();")
    }

    /// Go forward one history entry. No-op when there is no forward history.
    pub fn go_forward(&self) -> Result<(), wry::Error> {
        self.webview.evaluate_script("window.history.forward();")
    }

    /// Execute JavaScript in the surface context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Deliver a bridge response: invoke the hosted-side callback registered
    /// for `request_id`, then remove the registration.
    pub fn deliver_bridge_response(
        &self,
        request_id: &str,
        data: &serde_json::Value,
    ) -> Result<(), wry::Error> {
        let script = js_deliver_response(request_id, data);
        self.webview.evaluate_script(&script)
    }

    /// Set the surface bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Focus the surface.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Open devtools (if enabled).
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    /// Get a reference to the underlying wry WebView.
    pub fn inner(&self) -> &WebView {
        &self.webview
    }
}
