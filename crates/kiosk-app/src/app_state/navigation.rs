//! Drained surface-event handling and the view operations.

use kiosk_webview::{PageLoadState, WebViewEvent};

use super::core::KioskApp;

impl KioskApp {
    /// Drain the surface event sink and apply every event on this thread.
    pub(super) fn poll_surface_events(&mut self) {
        for event in self.manager.drain_events() {
            match event {
                WebViewEvent::PageLoad {
                    state: PageLoadState::Started,
                    url,
                } => self.note_load_started(url),

                WebViewEvent::PageLoad {
                    state: PageLoadState::Finished,
                    url,
                } => self.note_load_finished(&url),

                WebViewEvent::TitleChanged { title } => self.apply_document_title(title),

                WebViewEvent::BridgeMessage { body } => self.handle_bridge_message(&body),

                WebViewEvent::NavigationRequested { url } => {
                    // Keep reload() pointed at what the engine is showing.
                    if let Some(surface) = &mut self.surface {
                        surface.track_navigation(url);
                    }
                }

                WebViewEvent::OpenExternalRequested { url } => {
                    self.handle_external_redirect(url);
                }

                WebViewEvent::OpenInSurface { url } => {
                    // Allowed new-window request: single surface, load here.
                    if let Some(surface) = &mut self.surface {
                        if let Err(e) = surface.load_url(&url) {
                            tracing::warn!(url = %url, "failed to load redirected URL: {e}");
                        }
                    }
                }
            }
        }
    }

    /// A denied navigation: suppress any pending-load bookkeeping for the
    /// URL (the cancellation is not an error) and hand it to the OS browser.
    fn handle_external_redirect(&mut self, url: String) {
        self.cancel_pending_load(&url);
        if let Err(e) = kiosk_platform::open_external(&url) {
            tracing::warn!(url = %url, "external open failed: {e}");
        }
    }

    fn apply_document_title(&mut self, title: String) {
        if let Some(surface) = &mut self.surface {
            surface.set_title(title.clone());
        }
        if let Some(window) = &self.window {
            if title.is_empty() {
                window.set_title(&self.config.app.name);
            } else {
                window.set_title(&format!("{title} - {}", self.config.app.name));
            }
        }
    }

    // -- View operations --

    /// Navigate to the configured home URL.
    pub(super) fn load_home(&mut self) {
        let url = self.config.web.home_url.clone();
        if let Some(surface) = &mut self.surface {
            if let Err(e) = surface.load_url(&url) {
                tracing::error!(url = %url, "failed to load home: {e}");
            }
        }
    }

    /// Re-load whatever the surface is currently showing.
    pub(super) fn reload_surface(&mut self) {
        if let Some(surface) = &mut self.surface {
            if let Err(e) = surface.reload() {
                tracing::warn!("reload failed: {e}");
            }
        }
    }

    pub(super) fn go_back(&self) {
        if let Some(surface) = &self.surface {
            if let Err(e) = surface.go_back() {
                tracing::warn!("history back failed: {e}");
            }
        }
    }

    pub(super) fn go_forward(&self) {
        if let Some(surface) = &self.surface {
            if let Err(e) = surface.go_forward() {
                tracing::warn!("history forward failed: {e}");
            }
        }
    }
}
