//! Network reachability monitoring.
//!
//! A background thread probes well-known endpoints and publishes
//! deduplicated online/offline updates over a channel. The consumer polls
//! the receiving end from the UI-owning thread and applies transitions
//! through [`ConnectivityTracker`] -- the probe thread itself never touches
//! application state.

use std::net::{SocketAddr, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, warn};

/// Anycast resolvers used as connectivity probes. One reachable endpoint is
/// enough to count as online.
const PROBE_ENDPOINTS: &[&str] = &["1.1.1.1:443", "8.8.8.8:53", "9.9.9.9:53"];

const PROBE_INTERVAL: Duration = Duration::from_secs(5);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);
const SHUTDOWN_POLL: Duration = Duration::from_millis(250);

/// Owns the background probe thread. Dropping the monitor stops the thread.
pub struct ReachabilityMonitor {
    shutdown: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl ReachabilityMonitor {
    /// Start probing, sending an update over `updates` whenever the
    /// online/offline state changes. The initial state is also sent.
    pub fn spawn(updates: Sender<bool>) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let stop = Arc::clone(&shutdown);

        let thread = std::thread::Builder::new()
            .name("reachability".into())
            .spawn(move || {
                let mut last: Option<bool> = None;
                while !stop.load(Ordering::Relaxed) {
                    let online = probe_any();
                    if last != Some(online) {
                        debug!(online, "connectivity changed");
                        if updates.send(online).is_err() {
                            // Receiver gone; the app is shutting down.
                            return;
                        }
                        last = Some(online);
                    }

                    let mut waited = Duration::ZERO;
                    while waited < PROBE_INTERVAL && !stop.load(Ordering::Relaxed) {
                        std::thread::sleep(SHUTDOWN_POLL);
                        waited += SHUTDOWN_POLL;
                    }
                }
            });

        let thread = match thread {
            Ok(t) => Some(t),
            Err(e) => {
                warn!(error = %e, "failed to spawn reachability thread");
                None
            }
        };

        Self { shutdown, thread }
    }
}

impl Drop for ReachabilityMonitor {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Try each probe endpoint until one accepts a TCP connection.
fn probe_any() -> bool {
    PROBE_ENDPOINTS.iter().any(|endpoint| {
        endpoint
            .parse::<SocketAddr>()
            .ok()
            .map(|addr| TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT).is_ok())
            .unwrap_or(false)
    })
}

/// UI-thread view of connectivity. Applies raw updates and reports the one
/// transition that matters: offline to online.
#[derive(Debug)]
pub struct ConnectivityTracker {
    online: bool,
}

impl ConnectivityTracker {
    /// Starts optimistic: assumed online until the first probe says
    /// otherwise, so startup never triggers a spurious reload.
    pub fn new() -> Self {
        Self { online: true }
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Apply an update. Returns `true` only for an offline-to-online
    /// transition, the caller's cue to reload the hosted content.
    pub fn apply(&mut self, online: bool) -> bool {
        let was_online = self.online;
        self.online = online;
        online && !was_online
    }
}

impl Default for ConnectivityTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_online() {
        assert!(ConnectivityTracker::new().is_online());
    }

    #[test]
    fn offline_to_online_triggers_reload() {
        let mut tracker = ConnectivityTracker::new();
        assert!(!tracker.apply(false));
        assert!(tracker.apply(true));
    }

    #[test]
    fn online_to_online_is_silent() {
        let mut tracker = ConnectivityTracker::new();
        assert!(!tracker.apply(true));
        assert!(!tracker.apply(true));
    }

    #[test]
    fn online_to_offline_is_silent() {
        let mut tracker = ConnectivityTracker::new();
        assert!(!tracker.apply(false));
        assert!(!tracker.is_online());
    }

    #[test]
    fn offline_to_offline_is_silent() {
        let mut tracker = ConnectivityTracker::new();
        tracker.apply(false);
        assert!(!tracker.apply(false));
    }

    #[test]
    fn each_recovery_reloads_exactly_once() {
        let mut tracker = ConnectivityTracker::new();
        tracker.apply(false);
        assert!(tracker.apply(true));
        assert!(!tracker.apply(true));
        tracker.apply(false);
        assert!(tracker.apply(true));
    }

    #[test]
    fn monitor_stops_on_drop() {
        let (tx, rx) = std::sync::mpsc::channel();
        let monitor = ReachabilityMonitor::spawn(tx);
        // First update arrives promptly (initial state is always sent).
        let first = rx.recv_timeout(Duration::from_secs(10));
        assert!(first.is_ok());
        drop(monitor);
        // Channel closes once the thread is joined.
        while rx.recv_timeout(Duration::from_secs(1)).is_ok() {}
    }
}
