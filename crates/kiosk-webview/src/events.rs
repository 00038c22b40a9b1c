//! WebView event types.
//!
//! Handlers attached to the surface run on whatever thread the browser
//! engine delivers callbacks on; they only push events into the manager's
//! sink. The UI-owning thread drains the sink and applies all state changes,
//! so decision bookkeeping never races.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by the embedded surface.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad { state: PageLoadState, url: String },
    /// Document title changed.
    TitleChanged { title: String },
    /// A bridge message was received from hosted script content.
    BridgeMessage { body: String },
    /// An allowed navigation is proceeding in place.
    NavigationRequested { url: String },
    /// The governor cancelled an in-app navigation; the URL goes to the
    /// system browser.
    OpenExternalRequested { url: String },
    /// An allowed new-window request; the URL must be loaded in the
    /// existing surface (the shell never spawns a second one).
    OpenInSurface { url: String },
}
