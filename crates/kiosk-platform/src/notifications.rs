use kiosk_common::PlatformError;
use tracing::info;

/// Sends a native notification to the user.
///
/// Delivery goes through the OS notification service via `notify-rust`
/// (Notification Center on macOS, DBus on Linux). An authorization denial
/// reported by the OS is surfaced as `PlatformError::NotificationDenied` so
/// callers can distinguish it from a transport failure.
pub fn notify(title: &str, body: &str) -> Result<(), PlatformError> {
    let result = notify_rust::Notification::new()
        .summary(title)
        .body(body)
        .show();

    match result {
        Ok(_) => {
            info!("native notification sent");
            Ok(())
        }
        Err(e) => {
            let msg = e.to_string();
            if is_denial(&msg) {
                Err(PlatformError::NotificationDenied)
            } else {
                Err(PlatformError::NotificationError(msg))
            }
        }
    }
}

/// Whether an OS error message describes an authorization denial rather
/// than a delivery failure.
fn is_denial(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("denied") || lower.contains("not authorized") || lower.contains("unauthorized")
}
