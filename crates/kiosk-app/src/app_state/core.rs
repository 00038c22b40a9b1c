//! KioskApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use kiosk_config::KioskConfig;
use kiosk_platform::{ConnectivityTracker, ReachabilityMonitor};
use kiosk_webview::{DomainAllowlist, PendingRequests, WebViewHandle, WebViewManager};

use super::bridge::BridgeReply;
use super::load_watch::{PendingLoad, ProbeReport};

/// Top-level application state.
///
/// Everything here is owned by the event-loop thread. Workers (dialogs,
/// notifications, the reachability probe, load diagnosis) communicate back
/// exclusively through the mpsc receivers polled in `poll_and_schedule`.
pub struct KioskApp {
    pub(super) config: KioskConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) manager: WebViewManager,
    pub(super) surface: Option<WebViewHandle>,
    pub(super) dark_mode: bool,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Bridge bookkeeping
    pub(super) pending_requests: PendingRequests,
    pub(super) bridge_tx: mpsc::Sender<BridgeReply>,
    pub(super) bridge_rx: mpsc::Receiver<BridgeReply>,

    // Load watchdog
    pub(super) pending_load: Option<PendingLoad>,
    pub(super) probe_tx: mpsc::Sender<ProbeReport>,
    pub(super) probe_rx: mpsc::Receiver<ProbeReport>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Network reachability
    pub(super) connectivity: ConnectivityTracker,
    pub(super) reachability_rx: mpsc::Receiver<bool>,
    // Kept alive for the lifetime of the app; dropping it stops the probe
    // thread.
    pub(super) _reachability: ReachabilityMonitor,

    // Window frame persistence
    pub(super) frame_path: Option<PathBuf>,

    // Event loop
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl KioskApp {
    pub fn new(config: KioskConfig) -> Self {
        let allowlist = DomainAllowlist::new(&config.web.allowed_domains);
        let manager = WebViewManager::new(allowlist);

        let (bridge_tx, bridge_rx) = mpsc::channel();
        let (probe_tx, probe_rx) = mpsc::channel();

        let (reachability_tx, reachability_rx) = mpsc::channel();
        let reachability = ReachabilityMonitor::spawn(reachability_tx);

        let tokio_runtime = match tokio::runtime::Runtime::new() {
            Ok(rt) => Some(rt),
            Err(e) => {
                tracing::warn!("Failed to start tokio runtime: {e}");
                None
            }
        };

        let frame_path = match kiosk_platform::window_frame_file() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Window frame persistence disabled: {e}");
                None
            }
        };

        Self {
            config,
            window: None,
            manager,
            surface: None,
            dark_mode: false,
            modifiers: winit::keyboard::ModifiersState::empty(),
            pending_requests: PendingRequests::new(),
            bridge_tx,
            bridge_rx,
            pending_load: None,
            probe_tx,
            probe_rx,
            tokio_runtime,
            connectivity: ConnectivityTracker::new(),
            reachability_rx,
            _reachability: reachability,
            frame_path,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
