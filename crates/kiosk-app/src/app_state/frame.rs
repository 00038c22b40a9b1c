//! Window frame persistence.
//!
//! The frame is stored as a single `"x,y,width,height"` record and read back
//! once at window creation. A restored frame must still meet the configured
//! minimum size and intersect a connected monitor; anything else falls back
//! to the centered default.

use std::path::Path;
use std::sync::Arc;

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::monitor::MonitorHandle;
use winit::window::Window;

use kiosk_common::Rect;

use super::core::KioskApp;

/// Persisted window geometry: outer position and inner size, physical
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct WindowFrameRecord {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowFrameRecord {
    /// Encode to the stored string form.
    pub fn encode(&self) -> String {
        format!("{},{},{},{}", self.x, self.y, self.width, self.height)
    }

    /// Decode the stored string form. Corrupt records yield `None`.
    pub fn decode(s: &str) -> Option<Self> {
        let mut parts = s.trim().split(',');
        let x = parts.next()?.trim().parse().ok()?;
        let y = parts.next()?.trim().parse().ok()?;
        let width = parts.next()?.trim().parse().ok()?;
        let height = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() || width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            x,
            y,
            width,
            height,
        })
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x as f64,
            self.y as f64,
            self.width as f64,
            self.height as f64,
        )
    }

    /// Whether this frame may be restored: it meets the minimum size and
    /// still overlaps some connected monitor.
    pub fn is_restorable(&self, min_width: f64, min_height: f64, monitors: &[Rect]) -> bool {
        (self.width as f64) >= min_width
            && (self.height as f64) >= min_height
            && monitors.iter().any(|m| m.intersects(&self.rect()))
    }
}

pub(super) fn load_record(path: &Path) -> Option<WindowFrameRecord> {
    let content = std::fs::read_to_string(path).ok()?;
    WindowFrameRecord::decode(&content)
}

pub(super) fn save_record(path: &Path, record: &WindowFrameRecord) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, record.encode())
}

impl KioskApp {
    /// Apply the persisted frame when it is still valid, else center the
    /// window on the primary monitor.
    pub(super) fn restore_window_frame(&self, window: &Arc<Window>, event_loop: &ActiveEventLoop) {
        let monitors: Vec<Rect> = event_loop.available_monitors().map(monitor_rect).collect();
        let scale = window.scale_factor();
        let min_width = self.config.window.min_width as f64 * scale;
        let min_height = self.config.window.min_height as f64 * scale;

        if let Some(record) = self.frame_path.as_deref().and_then(load_record) {
            if record.is_restorable(min_width, min_height, &monitors) {
                tracing::debug!(frame = %record.encode(), "restoring persisted window frame");
                window.set_outer_position(PhysicalPosition::new(record.x, record.y));
                let _ = window.request_inner_size(PhysicalSize::new(record.width, record.height));
                return;
            }
            tracing::debug!("persisted window frame no longer valid, centering");
        }

        center_window(window, event_loop);
    }

    /// Persist the current frame. Called on move, resize, and close.
    pub(super) fn save_window_frame(&self) {
        let Some(path) = self.frame_path.as_deref() else {
            return;
        };
        let Some(window) = &self.window else {
            return;
        };
        let Ok(position) = window.outer_position() else {
            return;
        };
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return;
        }

        let record = WindowFrameRecord {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        };
        if let Err(e) = save_record(path, &record) {
            tracing::warn!("failed to persist window frame: {e}");
        }
    }
}

fn monitor_rect(monitor: MonitorHandle) -> Rect {
    let position = monitor.position();
    let size = monitor.size();
    Rect::new(
        position.x as f64,
        position.y as f64,
        size.width as f64,
        size.height as f64,
    )
}

fn center_window(window: &Window, event_loop: &ActiveEventLoop) {
    let Some(monitor) = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
    else {
        return;
    };
    let monitor_position = monitor.position();
    let monitor_size = monitor.size();
    let outer = window.outer_size();

    let x = monitor_position.x + (monitor_size.width.saturating_sub(outer.width) / 2) as i32;
    let y = monitor_position.y + (monitor_size.height.saturating_sub(outer.height) / 2) as i32;
    window.set_outer_position(PhysicalPosition::new(x, y));
}
