//! Load watchdog and failure diagnosis.
//!
//! wry reports page-load start/finish but not load errors, so failures are
//! detected by deadline: a load that starts and never finishes is probed
//! over HTTP and the probe outcome is mapped onto the failure taxonomy. A
//! pending load the governor cancelled (allowlist redirect) is cleared
//! without ever reaching presentation.

use std::time::{Duration, Instant};

use kiosk_webview::{render_error_page, LoadFailure};

use super::core::KioskApp;

/// How long a started load may run before it is treated as failed.
pub(super) const LOAD_DEADLINE: Duration = Duration::from_secs(30);

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// A load that has started but not yet finished.
#[derive(Debug)]
pub(super) struct PendingLoad {
    pub url: String,
    pub started_at: Instant,
}

/// What the diagnosis probe observed for a failed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ProbeOutcome {
    /// The server answered the probe; the in-surface load simply stalled.
    Responded,
    /// The probe itself timed out.
    TimedOut,
    /// DNS failure or connection refusal.
    ConnectFailed,
    /// TLS handshake or certificate failure.
    TlsFailed,
    /// Any other transport error.
    OtherError,
}

/// Result of probing a failed URL, sent back to the event-loop thread.
#[derive(Debug)]
pub(super) struct ProbeReport {
    pub url: String,
    pub outcome: ProbeOutcome,
}

/// Map a probe outcome onto the user-facing failure taxonomy. Connectivity
/// is checked first: with no network at all, every outcome is the same
/// offline story.
pub(super) fn classify(outcome: ProbeOutcome, online: bool) -> LoadFailure {
    if !online {
        return LoadFailure::NoConnectivity;
    }
    match outcome {
        ProbeOutcome::Responded | ProbeOutcome::TimedOut => LoadFailure::Timeout,
        ProbeOutcome::ConnectFailed => LoadFailure::HostUnreachable,
        ProbeOutcome::TlsFailed => LoadFailure::SecureConnectionFailed,
        ProbeOutcome::OtherError => LoadFailure::Other,
    }
}

impl KioskApp {
    pub(super) fn note_load_started(&mut self, url: String) {
        self.pending_load = Some(PendingLoad {
            url,
            started_at: Instant::now(),
        });
    }

    pub(super) fn note_load_finished(&mut self, url: &str) {
        if self.pending_load.is_some() {
            tracing::debug!(url, "load finished");
            self.pending_load = None;
        }
    }

    /// The governor cancelled a navigation to `url`; that cancellation must
    /// never surface as an error page.
    pub(super) fn cancel_pending_load(&mut self, url: &str) {
        if self
            .pending_load
            .as_ref()
            .is_some_and(|pending| pending.url == url)
        {
            tracing::debug!(url, "pending load cancelled by governor, suppressed");
            self.pending_load = None;
        }
    }

    /// Fire the diagnosis probe for a load that blew its deadline.
    pub(super) fn check_load_deadline(&mut self) {
        let expired = self
            .pending_load
            .as_ref()
            .is_some_and(|pending| pending.started_at.elapsed() >= LOAD_DEADLINE);
        if !expired {
            return;
        }
        let Some(pending) = self.pending_load.take() else {
            return;
        };

        tracing::warn!(url = %pending.url, "load deadline exceeded, probing");

        let Some(runtime) = &self.tokio_runtime else {
            // No runtime to probe with: report a generic failure directly.
            let _ = self.probe_tx.send(ProbeReport {
                url: pending.url,
                outcome: ProbeOutcome::OtherError,
            });
            return;
        };

        let tx = self.probe_tx.clone();
        runtime.spawn(async move {
            let outcome = probe_url(&pending.url).await;
            let _ = tx.send(ProbeReport {
                url: pending.url,
                outcome,
            });
        });
    }

    /// Apply finished probes: classify against current connectivity and
    /// render the fallback page.
    pub(super) fn poll_probe_reports(&mut self) {
        while let Ok(report) = self.probe_rx.try_recv() {
            let failure = classify(report.outcome, self.connectivity.is_online());
            self.present_load_failure(failure, &report.url);
        }
    }

    fn present_load_failure(&mut self, failure: LoadFailure, url: &str) {
        let Some(page) = render_error_page(failure, url) else {
            return;
        };
        tracing::info!(url, ?failure, "rendering fallback page");
        if let Some(surface) = &self.surface {
            if let Err(e) = surface.show_fallback(&page) {
                tracing::warn!("failed to render fallback page: {e}");
            }
        }
    }
}

/// Probe a URL with a plain GET to find out why the surface load failed.
async fn probe_url(url: &str) -> ProbeOutcome {
    let client = match reqwest::Client::builder().timeout(PROBE_TIMEOUT).build() {
        Ok(client) => client,
        Err(_) => return ProbeOutcome::OtherError,
    };

    match client.get(url).send().await {
        Ok(_) => ProbeOutcome::Responded,
        Err(e) => outcome_from_error(&e),
    }
}

fn outcome_from_error(error: &reqwest::Error) -> ProbeOutcome {
    if error.is_timeout() {
        return ProbeOutcome::TimedOut;
    }
    if is_tls_error(error) {
        return ProbeOutcome::TlsFailed;
    }
    if error.is_connect() {
        return ProbeOutcome::ConnectFailed;
    }
    ProbeOutcome::OtherError
}

/// Walk the error source chain looking for TLS/certificate language;
/// reqwest folds TLS failures into its connect error.
fn is_tls_error(error: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(error);
    while let Some(err) = source {
        let msg = err.to_string().to_ascii_lowercase();
        if msg.contains("tls") || msg.contains("ssl") || msg.contains("certificate") {
            return true;
        }
        source = err.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_overrides_every_outcome() {
        for outcome in [
            ProbeOutcome::Responded,
            ProbeOutcome::TimedOut,
            ProbeOutcome::ConnectFailed,
            ProbeOutcome::TlsFailed,
            ProbeOutcome::OtherError,
        ] {
            assert_eq!(classify(outcome, false), LoadFailure::NoConnectivity);
        }
    }

    #[test]
    fn stalled_and_timed_out_loads_are_timeouts() {
        assert_eq!(classify(ProbeOutcome::Responded, true), LoadFailure::Timeout);
        assert_eq!(classify(ProbeOutcome::TimedOut, true), LoadFailure::Timeout);
    }

    #[test]
    fn connect_failures_map_to_host_unreachable() {
        assert_eq!(
            classify(ProbeOutcome::ConnectFailed, true),
            LoadFailure::HostUnreachable
        );
    }

    #[test]
    fn tls_failures_map_to_secure_connection_failed() {
        assert_eq!(
            classify(ProbeOutcome::TlsFailed, true),
            LoadFailure::SecureConnectionFailed
        );
    }

    #[test]
    fn unknown_errors_map_to_generic() {
        assert_eq!(classify(ProbeOutcome::OtherError, true), LoadFailure::Other);
    }
}
