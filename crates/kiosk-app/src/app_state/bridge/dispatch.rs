//! Bridge message validation and dispatch.

use kiosk_webview::{BridgeAction, BridgeRequest};

use crate::app_state::core::KioskApp;

impl KioskApp {
    /// Handle a single bridge message from hosted content.
    pub(in crate::app_state) fn handle_bridge_message(&mut self, body: &str) {
        let request = match BridgeRequest::from_json(body) {
            Some(request) => request,
            None => {
                tracing::warn!(
                    body_len = body.len(),
                    "bridge message rejected: malformed envelope"
                );
                return;
            }
        };

        // Exactly-once: a duplicate requestId never reaches a handler.
        if !self.pending_requests.begin(&request.request_id) {
            return;
        }

        tracing::debug!(request_id = %request.request_id, "bridge request dispatched");

        let request_id = request.request_id;
        match request.action {
            BridgeAction::ShowNotification { title, body } => {
                self.handle_show_notification(request_id, title, body);
            }
            BridgeAction::OpenFilePicker { allowed_types } => {
                self.handle_open_file_picker(request_id, allowed_types);
            }
            BridgeAction::SaveFilePicker { suggested_name } => {
                self.handle_save_file_picker(request_id, suggested_name);
            }
            BridgeAction::GetSystemInfo => {
                let data = super::system_handlers::system_info_response(self.dark_mode);
                self.respond(&request_id, data);
            }
            BridgeAction::CopyToClipboard { text } => {
                let data = super::system_handlers::copy_to_clipboard_response(text);
                self.respond(&request_id, data);
            }
            BridgeAction::ReadClipboard => {
                let data = super::system_handlers::read_clipboard_response();
                self.respond(&request_id, data);
            }
            BridgeAction::Unknown { action } => {
                tracing::warn!(%action, "bridge request with unknown action");
                self.respond(
                    &request_id,
                    serde_json::json!({ "error": format!("Unknown action: {action}") }),
                );
            }
        }
    }

    /// Deliver a response into the hosted context. The pending table
    /// guarantees at-most-once delivery per requestId.
    pub(in crate::app_state) fn respond(&mut self, request_id: &str, data: serde_json::Value) {
        if !self.pending_requests.complete(request_id) {
            return;
        }
        let Some(surface) = &self.surface else {
            tracing::warn!(request_id, "bridge response dropped: no surface");
            return;
        };
        if let Err(e) = surface.deliver_bridge_response(request_id, &data) {
            tracing::warn!(request_id, "failed to deliver bridge response: {e}");
        }
    }

    /// Apply replies produced by worker threads.
    pub(in crate::app_state) fn poll_bridge_replies(&mut self) {
        while let Ok(reply) = self.bridge_rx.try_recv() {
            self.respond(&reply.request_id, reply.data);
        }
    }
}
