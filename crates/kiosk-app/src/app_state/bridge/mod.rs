//! Native bridge dispatch and capability handlers.
//!
//! Dispatch runs on the event-loop thread. Handlers that wait on the user
//! (dialogs, notification delivery) run on worker threads and send a
//! [`BridgeReply`] back through the channel polled by the event loop, so the
//! exactly-once response bookkeeping never leaves this thread.

mod dialog_handlers;
mod dispatch;
mod notification_handlers;
mod system_handlers;

/// A handler result produced off-thread, delivered back on the event-loop
/// thread.
#[derive(Debug)]
pub(super) struct BridgeReply {
    pub request_id: String,
    pub data: serde_json::Value,
}
