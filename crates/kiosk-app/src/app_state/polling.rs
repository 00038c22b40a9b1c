//! Event-loop polling: drain surface events and worker channels.

use std::time::{Duration, Instant};

use winit::event_loop::ActiveEventLoop;

use super::core::KioskApp;

pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(50);

impl KioskApp {
    /// Run polling and schedule the next wake-up.
    ///
    /// Everything that crosses a thread boundary funnels through here: the
    /// surface event sink, dialog/notification replies, load-probe reports,
    /// and reachability updates are all applied on this thread.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_surface_events();
            self.poll_bridge_replies();
            self.poll_probe_reports();
            self.poll_reachability();
            self.check_load_deadline();
        }

        event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(
            Instant::now() + POLL_INTERVAL,
        ));
    }

    /// Apply reachability updates; an offline-to-online transition reloads
    /// the hosted content exactly once.
    pub(super) fn poll_reachability(&mut self) {
        while let Ok(online) = self.reachability_rx.try_recv() {
            if self.connectivity.apply(online) {
                tracing::info!("network restored, reloading hosted content");
                self.reload_surface();
            }
        }
    }
}
