//! WebView lifecycle management.
//!
//! `WebViewManager` builds the single `wry::WebView` surface, installs the
//! navigation governor and bridge plumbing, and collects events for the main
//! event loop to drain.

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;
use crate::policy::DomainAllowlist;

mod handle;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::SurfaceConfig;

/// Owns the navigation allowlist and the event sink shared with the wry
/// handler closures.
pub struct WebViewManager {
    /// Event sink -- handler closures push here, the event loop drains.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Read-only after construction; shared into the governor closures.
    pub(crate) allowlist: Arc<DomainAllowlist>,
}

impl WebViewManager {
    /// Create a manager gating navigation with the given allowlist.
    pub fn new(allowlist: DomainAllowlist) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            allowlist: Arc::new(allowlist),
        }
    }

    pub fn allowlist(&self) -> &DomainAllowlist {
        &self.allowlist
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self.events.lock().unwrap();
        std::mem::take(&mut *events)
    }
}
