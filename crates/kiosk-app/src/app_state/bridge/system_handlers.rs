//! Synchronous bridge handlers: system info and clipboard.

use serde_json::{json, Value};

use kiosk_platform::Clipboard;

/// `getSystemInfo`: a snapshot of the host environment, no mutation.
pub(super) fn system_info_response(dark_mode: bool) -> Value {
    json!({
        "appVersion": env!("CARGO_PKG_VERSION"),
        "osVersion": kiosk_platform::os_version(),
        "isDarkMode": dark_mode,
    })
}

/// `copyToClipboard`: write `text`, or report the missing parameter without
/// touching the clipboard.
pub(super) fn copy_to_clipboard_response(text: Option<String>) -> Value {
    let Some(text) = text else {
        return json!({ "success": false, "error": "No text provided" });
    };

    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(&text)) {
        Ok(()) => json!({ "success": true }),
        Err(e) => {
            tracing::warn!("clipboard write failed: {e}");
            json!({ "success": false, "error": e.to_string() })
        }
    }
}

/// `readClipboard`: `{text}`, empty string when the clipboard holds no text.
pub(super) fn read_clipboard_response() -> Value {
    match Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
        Ok(text) => json!({ "text": text }),
        Err(e) => {
            tracing::warn!("clipboard read failed: {e}");
            json!({ "text": "" })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_info_carries_all_fields() {
        let data = system_info_response(true);
        assert_eq!(data["appVersion"], env!("CARGO_PKG_VERSION"));
        assert!(data["osVersion"].as_str().is_some_and(|s| !s.is_empty()));
        assert_eq!(data["isDarkMode"], true);

        let data = system_info_response(false);
        assert_eq!(data["isDarkMode"], false);
    }

    #[test]
    fn copy_without_text_reports_missing_parameter() {
        // The clipboard must not be touched on this path, so the response is
        // computable without one.
        let data = copy_to_clipboard_response(None);
        assert_eq!(data["success"], false);
        assert_eq!(data["error"], "No text provided");
    }
}
