use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::bridge::BRIDGE_INIT_SCRIPT;
use crate::events::{PageLoadState, WebViewEvent};
use crate::policy::{decide, DomainAllowlist, NavigationDecision, NavigationOrigin, NavigationRequest};

use super::handle::WebViewHandle;
use super::types::SurfaceConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the surface as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The surface is positioned at `bounds` within the parent window and
    /// should be resized to track it.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: SurfaceConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_focused(true);

        // The bridge only exists when hosted script can run at all.
        if config.javascript {
            builder = builder.with_initialization_script(BRIDGE_INIT_SCRIPT);
            builder = Self::attach_bridge_handler(builder, Arc::clone(&events));
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_page_load_handler(builder, Arc::clone(&events));
        builder = Self::attach_title_handler(builder, Arc::clone(&events));

        // Navigation governor: every navigation and new-window request is
        // decided against the allowlist.
        builder = Self::attach_navigation_handler(
            builder,
            Arc::clone(&events),
            Arc::clone(&self.allowlist),
        );
        builder = Self::attach_new_window_handler(
            builder,
            Arc::clone(&events),
            Arc::clone(&self.allowlist),
        );

        builder = builder.with_url(&config.url);

        let webview = builder.build_as_child(window)?;

        debug!(url = %config.url, "surface created");

        Ok(WebViewHandle::new(webview, config.url))
    }

    fn attach_bridge_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the message is JSON before forwarding.
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(body_len = body.len(), "bridge message rejected: invalid JSON");
                return;
            }

            debug!(body_len = body.len(), "bridge message from hosted content");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::BridgeMessage { body });
            }
        })
    }

    fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad { state, url });
            }
        })
    }

    fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::TitleChanged { title });
            }
        })
    }

    fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        allowlist: Arc<DomainAllowlist>,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            let request = NavigationRequest::parse(&url, NavigationOrigin::InPage);
            match decide(&allowlist, &request) {
                NavigationDecision::LoadInPlace => {
                    debug!(url = %url, "navigation allowed");
                    if let Ok(mut evts) = events.lock() {
                        evts.push(WebViewEvent::NavigationRequested { url });
                    }
                    true
                }
                NavigationDecision::OpenExternal => {
                    info!(url = %url, "navigation denied: routing to system browser");
                    if let Ok(mut evts) = events.lock() {
                        evts.push(WebViewEvent::OpenExternalRequested { url });
                    }
                    false
                }
            }
        })
    }

    fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        allowlist: Arc<DomainAllowlist>,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            let request = NavigationRequest::parse(&url, NavigationOrigin::NewWindow);
            match decide(&allowlist, &request) {
                NavigationDecision::LoadInPlace => {
                    debug!(url = %url, "new-window request redirected into surface");
                    if let Ok(mut evts) = events.lock() {
                        evts.push(WebViewEvent::OpenInSurface { url });
                    }
                }
                NavigationDecision::OpenExternal => {
                    info!(url = %url, "new-window request denied: routing to system browser");
                    if let Ok(mut evts) = events.lock() {
                        evts.push(WebViewEvent::OpenExternalRequested { url });
                    }
                }
            }
            // Single surface: a popup is never spawned either way.
            false
        })
    }
}
