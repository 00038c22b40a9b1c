//! Bridge handlers for the native file dialogs.
//!
//! Dialogs block, so each one runs on its own worker thread; the outcome
//! re-enters the event loop as a `BridgeReply`. A dismissed dialog is a
//! normal `{cancelled: true}` response, never an error.

use std::path::Path;

use serde_json::{json, Value};

use crate::app_state::core::KioskApp;

use super::BridgeReply;

impl KioskApp {
    /// `openFilePicker`: single-file, files-only selection, optionally
    /// filtered by extension.
    pub(in crate::app_state) fn handle_open_file_picker(
        &mut self,
        request_id: String,
        allowed_types: Option<Vec<String>>,
    ) {
        let tx = self.bridge_tx.clone();
        let fallback_id = request_id.clone();

        let spawned = std::thread::Builder::new()
            .name("file-picker".into())
            .spawn(move || {
                let mut dialog = rfd::FileDialog::new();
                if let Some(types) = &allowed_types {
                    let extensions: Vec<&str> = types.iter().map(String::as_str).collect();
                    if !extensions.is_empty() {
                        dialog = dialog.add_filter("Allowed types", &extensions);
                    }
                }

                let data = match dialog.pick_file() {
                    Some(path) => open_response(&path),
                    None => json!({ "cancelled": true }),
                };
                let _ = tx.send(BridgeReply { request_id, data });
            });

        if let Err(e) = spawned {
            tracing::warn!("failed to spawn file picker: {e}");
            self.respond(&fallback_id, json!({ "cancelled": true }));
        }
    }

    /// `saveFilePicker`: native save dialog with an optional suggested name.
    pub(in crate::app_state) fn handle_save_file_picker(
        &mut self,
        request_id: String,
        suggested_name: Option<String>,
    ) {
        let tx = self.bridge_tx.clone();
        let fallback_id = request_id.clone();

        let spawned = std::thread::Builder::new()
            .name("save-picker".into())
            .spawn(move || {
                let mut dialog = rfd::FileDialog::new();
                if let Some(name) = &suggested_name {
                    dialog = dialog.set_file_name(name);
                }

                let data = match dialog.save_file() {
                    Some(path) => json!({ "path": path.to_string_lossy() }),
                    None => json!({ "cancelled": true }),
                };
                let _ = tx.send(BridgeReply { request_id, data });
            });

        if let Err(e) = spawned {
            tracing::warn!("failed to spawn save picker: {e}");
            self.respond(&fallback_id, json!({ "cancelled": true }));
        }
    }
}

fn open_response(path: &Path) -> Value {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    json!({ "path": path.to_string_lossy(), "name": name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_response_carries_path_and_name() {
        let data = open_response(Path::new("/tmp/docs/report.pdf"));
        assert_eq!(data["path"], "/tmp/docs/report.pdf");
        assert_eq!(data["name"], "report.pdf");
    }

    #[test]
    fn open_response_with_no_file_name_is_empty() {
        let data = open_response(Path::new("/"));
        assert_eq!(data["name"], "");
    }
}
