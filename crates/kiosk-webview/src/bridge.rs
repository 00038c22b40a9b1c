//! Native bridge protocol between hosted script content and the shell.
//!
//! Messages flow in both directions over the single wry IPC channel:
//! - **JS -> Rust**: hosted content calls `window.kiosk.call(action, payload)`,
//!   which registers a per-request callback and posts
//!   `{"action", "requestId", "payload"}` through `window.ipc.postMessage`.
//! - **Rust -> JS**: the shell injects a script that invokes the registered
//!   callback for the `requestId` and then deletes it, so each request is
//!   answered at most once.

use std::collections::HashSet;

use serde_json::Value;
use tracing::warn;

// =============================================================================
// WIRE FORMAT
// =============================================================================

/// A bridge call parsed into its typed action.
///
/// The wire payload stays a string-keyed JSON object; parsing at the boundary
/// gives the handlers typed fields to work with.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeAction {
    ShowNotification {
        title: String,
        body: String,
    },
    OpenFilePicker {
        allowed_types: Option<Vec<String>>,
    },
    SaveFilePicker {
        suggested_name: Option<String>,
    },
    GetSystemInfo,
    /// `text` stays optional here: a missing value is answered with an
    /// in-protocol error response, not a parse rejection.
    CopyToClipboard {
        text: Option<String>,
    },
    ReadClipboard,
    Unknown {
        action: String,
    },
}

/// One inbound bridge request. Crosses the bridge boundary exactly once and
/// is matched to exactly one response.
#[derive(Debug, Clone)]
pub struct BridgeRequest {
    pub request_id: String,
    pub action: BridgeAction,
}

impl BridgeRequest {
    /// Parse a raw IPC message body. Returns `None` when the envelope is
    /// malformed (not JSON, or missing `action`/`requestId`) -- such
    /// messages are dropped by the dispatcher.
    pub fn from_json(raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        let action = value.get("action")?.as_str()?.to_owned();
        let request_id = value.get("requestId")?.as_str()?.to_owned();
        if request_id.is_empty() {
            return None;
        }
        let payload = value.get("payload").cloned().unwrap_or(Value::Null);
        Some(Self {
            request_id,
            action: BridgeAction::parse(&action, &payload),
        })
    }
}

impl BridgeAction {
    fn parse(action: &str, payload: &Value) -> Self {
        match action {
            "showNotification" => Self::ShowNotification {
                title: str_field(payload, "title").unwrap_or_default(),
                body: str_field(payload, "body").unwrap_or_default(),
            },
            "openFilePicker" => Self::OpenFilePicker {
                allowed_types: payload
                    .get("allowedTypes")
                    .and_then(Value::as_array)
                    .map(|types| {
                        types
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_owned)
                            .collect()
                    }),
            },
            "saveFilePicker" => Self::SaveFilePicker {
                suggested_name: str_field(payload, "suggestedName"),
            },
            "getSystemInfo" => Self::GetSystemInfo,
            "copyToClipboard" => Self::CopyToClipboard {
                text: str_field(payload, "text"),
            },
            "readClipboard" => Self::ReadClipboard,
            other => Self::Unknown {
                action: other.to_owned(),
            },
        }
    }
}

fn str_field(payload: &Value, key: &str) -> Option<String> {
    payload.get(key).and_then(Value::as_str).map(str::to_owned)
}

// =============================================================================
// PENDING-REQUEST TABLE
// =============================================================================

/// Tracks in-flight request ids to enforce the exactly-once response
/// contract: a duplicate inbound id is rejected, and a response can only be
/// delivered for an id that is still pending.
#[derive(Debug, Default)]
pub struct PendingRequests {
    in_flight: HashSet<String>,
}

impl PendingRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a request id. Returns `false` (and logs) when the id is
    /// already in flight; the caller must drop the duplicate request.
    pub fn begin(&mut self, request_id: &str) -> bool {
        if !self.in_flight.insert(request_id.to_owned()) {
            warn!(request_id, "bridge request rejected: duplicate requestId");
            return false;
        }
        true
    }

    /// Remove a request id before delivering its response. Returns `false`
    /// when the id is unknown or already answered; the caller must not
    /// deliver anything.
    pub fn complete(&mut self, request_id: &str) -> bool {
        if !self.in_flight.remove(request_id) {
            warn!(
                request_id,
                "bridge response dropped: requestId not pending (already answered?)"
            );
            return false;
        }
        true
    }

    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }
}

// =============================================================================
// JS INJECTION
// =============================================================================

/// JavaScript snippet that sets up the bridge on the hosted side. Injected as
/// an initialization script into the surface (only when JavaScript is
/// enabled -- the bridge cannot exist without it).
pub const BRIDGE_INIT_SCRIPT: &str = r#"
(function() {
    if (window.kiosk) { return; }
    var callbacks = {};
    var counter = 0;
    window.__kioskCallbacks = callbacks;
    window.kiosk = {
        // Invoke a native capability. Resolves with the response object.
        call: function(action, payload) {
            return new Promise(function(resolve) {
                var requestId = 'req-' + (++counter) + '-' +
                    Math.random().toString(36).slice(2);
                callbacks[requestId] = resolve;
                window.ipc.postMessage(JSON.stringify({
                    action: action,
                    requestId: requestId,
                    payload: payload || {}
                }));
            });
        }
    };
})();
"#;

/// Generate the JS snippet that delivers a response: invoke the callback
/// registered for `request_id`, then delete the registration.
pub fn js_deliver_response(request_id: &str, data: &Value) -> String {
    let id = serde_json::to_string(request_id).unwrap_or_else(|_| "\"\"".to_string());
    let payload = serde_json::to_string(data).unwrap_or_else(|_| "null".to_string());
    format!(
        "if (window.__kioskCallbacks && window.__kioskCallbacks[{id}]) {{ \
         window.__kioskCallbacks[{id}]({payload}); \
         delete window.__kioskCallbacks[{id}]; }}"
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- Envelope parsing --

    #[test]
    fn parses_show_notification() {
        let raw = r#"{"action":"showNotification","requestId":"req-1","payload":{"title":"Hi","body":"There"}}"#;
        let req = BridgeRequest::from_json(raw).unwrap();
        assert_eq!(req.request_id, "req-1");
        assert_eq!(
            req.action,
            BridgeAction::ShowNotification {
                title: "Hi".into(),
                body: "There".into()
            }
        );
    }

    #[test]
    fn notification_fields_default_to_empty() {
        let raw = r#"{"action":"showNotification","requestId":"req-2","payload":{}}"#;
        let req = BridgeRequest::from_json(raw).unwrap();
        assert_eq!(
            req.action,
            BridgeAction::ShowNotification {
                title: String::new(),
                body: String::new()
            }
        );
    }

    #[test]
    fn parses_open_file_picker_with_types() {
        let raw = r#"{"action":"openFilePicker","requestId":"req-3","payload":{"allowedTypes":["pdf","txt"]}}"#;
        let req = BridgeRequest::from_json(raw).unwrap();
        assert_eq!(
            req.action,
            BridgeAction::OpenFilePicker {
                allowed_types: Some(vec!["pdf".into(), "txt".into()])
            }
        );
    }

    #[test]
    fn parses_open_file_picker_without_types() {
        let raw = r#"{"action":"openFilePicker","requestId":"req-4","payload":{}}"#;
        let req = BridgeRequest::from_json(raw).unwrap();
        assert_eq!(
            req.action,
            BridgeAction::OpenFilePicker {
                allowed_types: None
            }
        );
    }

    #[test]
    fn parses_save_file_picker() {
        let raw = r#"{"action":"saveFilePicker","requestId":"req-5","payload":{"suggestedName":"report.pdf"}}"#;
        let req = BridgeRequest::from_json(raw).unwrap();
        assert_eq!(
            req.action,
            BridgeAction::SaveFilePicker {
                suggested_name: Some("report.pdf".into())
            }
        );
    }

    #[test]
    fn parses_clipboard_and_system_actions() {
        let req = BridgeRequest::from_json(
            r#"{"action":"getSystemInfo","requestId":"req-6","payload":{}}"#,
        )
        .unwrap();
        assert_eq!(req.action, BridgeAction::GetSystemInfo);

        let req = BridgeRequest::from_json(
            r#"{"action":"readClipboard","requestId":"req-7"}"#,
        )
        .unwrap();
        assert_eq!(req.action, BridgeAction::ReadClipboard);

        let req = BridgeRequest::from_json(
            r#"{"action":"copyToClipboard","requestId":"req-8","payload":{"text":"hello"}}"#,
        )
        .unwrap();
        assert_eq!(
            req.action,
            BridgeAction::CopyToClipboard {
                text: Some("hello".into())
            }
        );
    }

    #[test]
    fn copy_without_text_keeps_none() {
        let req = BridgeRequest::from_json(
            r#"{"action":"copyToClipboard","requestId":"req-9","payload":{}}"#,
        )
        .unwrap();
        assert_eq!(req.action, BridgeAction::CopyToClipboard { text: None });
    }

    #[test]
    fn non_string_text_is_ignored() {
        let req = BridgeRequest::from_json(
            r#"{"action":"copyToClipboard","requestId":"req-10","payload":{"text":42}}"#,
        )
        .unwrap();
        assert_eq!(req.action, BridgeAction::CopyToClipboard { text: None });
    }

    #[test]
    fn unknown_action_is_preserved() {
        let req = BridgeRequest::from_json(
            r#"{"action":"launchMissiles","requestId":"req-11","payload":{}}"#,
        )
        .unwrap();
        assert_eq!(
            req.action,
            BridgeAction::Unknown {
                action: "launchMissiles".into()
            }
        );
    }

    #[test]
    fn malformed_envelopes_are_rejected() {
        assert!(BridgeRequest::from_json("not json").is_none());
        assert!(BridgeRequest::from_json(r#"{"requestId":"req-12"}"#).is_none());
        assert!(BridgeRequest::from_json(r#"{"action":"getSystemInfo"}"#).is_none());
        assert!(
            BridgeRequest::from_json(r#"{"action":"getSystemInfo","requestId":""}"#).is_none()
        );
        assert!(
            BridgeRequest::from_json(r#"{"action":7,"requestId":"req-13"}"#).is_none()
        );
    }

    // -- Pending table: exactly-once --

    #[test]
    fn begin_then_complete_succeeds_once() {
        let mut pending = PendingRequests::new();
        assert!(pending.begin("req-1"));
        assert!(pending.complete("req-1"));
        assert!(pending.is_empty());
    }

    #[test]
    fn duplicate_begin_is_rejected() {
        let mut pending = PendingRequests::new();
        assert!(pending.begin("req-1"));
        assert!(!pending.begin("req-1"));
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn double_complete_is_rejected() {
        let mut pending = PendingRequests::new();
        pending.begin("req-1");
        assert!(pending.complete("req-1"));
        assert!(!pending.complete("req-1"));
    }

    #[test]
    fn complete_without_begin_is_rejected() {
        let mut pending = PendingRequests::new();
        assert!(!pending.complete("req-never"));
    }

    #[test]
    fn ids_are_independent() {
        let mut pending = PendingRequests::new();
        pending.begin("req-1");
        pending.begin("req-2");
        assert!(pending.complete("req-2"));
        assert!(!pending.complete("req-2"));
        assert!(pending.complete("req-1"));
        assert!(pending.is_empty());
    }

    // -- Response injection --

    #[test]
    fn deliver_script_invokes_and_deletes_callback() {
        let script = js_deliver_response("req-1", &json!({"success": true}));
        assert!(script.contains("window.__kioskCallbacks[\"req-1\"]"));
        assert!(script.contains("{\"success\":true}"));
        assert!(script.contains("delete window.__kioskCallbacks[\"req-1\"]"));
    }

    #[test]
    fn deliver_script_escapes_hostile_request_ids() {
        // A requestId is hosted-side input; quoting must go through the JSON
        // serializer so it cannot break out of the string literal.
        let script = js_deliver_response("req\"];alert(1);//", &json!({}));
        assert!(script.contains(r#""req\"];alert(1);//""#));
        assert!(!script.contains(r#"["req"]"#));
    }

    #[test]
    fn init_script_uses_the_ipc_channel() {
        assert!(BRIDGE_INIT_SCRIPT.contains("window.ipc.postMessage"));
        assert!(BRIDGE_INIT_SCRIPT.contains("window.__kioskCallbacks"));
        assert!(BRIDGE_INIT_SCRIPT.contains("requestId"));
    }
}
