//! Bridge handler for native notifications.

use serde_json::{json, Value};

use kiosk_common::PlatformError;

use crate::app_state::core::KioskApp;

use super::BridgeReply;

impl KioskApp {
    /// `showNotification`: deliver through the OS notification service.
    /// Delivery may wait on an authorization prompt, so it runs off-thread.
    pub(in crate::app_state) fn handle_show_notification(
        &mut self,
        request_id: String,
        title: String,
        body: String,
    ) {
        let tx = self.bridge_tx.clone();
        let fallback_id = request_id.clone();

        let spawned = std::thread::Builder::new()
            .name("notification".into())
            .spawn(move || {
                let data = notification_response(kiosk_platform::notify(&title, &body));
                let _ = tx.send(BridgeReply { request_id, data });
            });

        if let Err(e) = spawned {
            tracing::warn!("failed to spawn notification worker: {e}");
            self.respond(
                &fallback_id,
                notification_response(Err(PlatformError::NotificationError(e.to_string()))),
            );
        }
    }
}

/// Map a delivery result onto the wire contract. A permission denial has a
/// fixed message the hosted side can match on.
fn notification_response(result: Result<(), PlatformError>) -> Value {
    match result {
        Ok(()) => json!({ "success": true }),
        Err(PlatformError::NotificationDenied) => {
            json!({ "success": false, "error": "Notification permission denied" })
        }
        Err(e) => json!({ "success": false, "error": e.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granted_delivery_is_a_success() {
        let data = notification_response(Ok(()));
        assert_eq!(data, json!({ "success": true }));
    }

    #[test]
    fn denial_uses_the_canonical_message() {
        let data = notification_response(Err(PlatformError::NotificationDenied));
        assert_eq!(data["success"], false);
        assert_eq!(data["error"], "Notification permission denied");
    }

    #[test]
    fn other_failures_carry_their_message() {
        let data = notification_response(Err(PlatformError::NotificationError(
            "backend unavailable".into(),
        )));
        assert_eq!(data["success"], false);
        assert_eq!(data["error"], "notification error: backend unavailable");
    }
}
