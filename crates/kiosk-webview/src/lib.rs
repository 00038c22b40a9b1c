//! Embedded browser surface for the kiosk shell.
//!
//! Wraps the `wry` crate to provide:
//! - A single managed WebView per window
//! - Domain-gated navigation (in-app vs. system browser)
//! - The native bridge protocol (JS <-> Rust request/response)
//! - A locally rendered fallback page for load failures
//! - Event handling (page load, title change, navigation)

pub mod bridge;
pub mod error_page;
pub mod events;
pub mod manager;
pub mod policy;

pub use bridge::{BridgeAction, BridgeRequest, PendingRequests, BRIDGE_INIT_SCRIPT};
pub use error_page::{render_error_page, LoadFailure};
pub use events::{PageLoadState, WebViewEvent};
pub use manager::{SurfaceConfig, WebViewHandle, WebViewManager};
pub use policy::{
    decide, DomainAllowlist, NavigationDecision, NavigationOrigin, NavigationRequest,
};
