//! `ApplicationHandler` implementation for the winit event loop.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::{Theme, Window, WindowId};

use kiosk_webview::SurfaceConfig;

use super::core::KioskApp;

impl ApplicationHandler for KioskApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.save_window_frame();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_surface_bounds();
                    self.save_window_frame();
                }
            }

            WindowEvent::Moved(_) => {
                self.save_window_frame();
            }

            WindowEvent::ThemeChanged(theme) => {
                self.dark_mode = theme == Theme::Dark;
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl KioskApp {
    /// Create the native window and the embedded surface, restoring the
    /// persisted frame when it is still valid.
    fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_cfg = &self.config.window;
        let attrs = Window::default_attributes()
            .with_title(&self.config.app.name)
            .with_inner_size(LogicalSize::new(
                window_cfg.width as f64,
                window_cfg.height as f64,
            ))
            .with_min_inner_size(LogicalSize::new(
                window_cfg.min_width as f64,
                window_cfg.min_height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        self.restore_window_frame(&window, event_loop);
        self.dark_mode = matches!(window.theme(), Some(Theme::Dark));

        let surface_config = SurfaceConfig {
            url: self.config.web.home_url.clone(),
            user_agent: Some(self.config.web.user_agent.clone()),
            devtools: self.config.features.devtools,
            javascript: self.config.features.javascript,
        };

        let bounds = full_window_bounds(&window);
        match self.manager.create(window.as_ref(), bounds, surface_config) {
            Ok(handle) => self.surface = Some(handle),
            Err(e) => {
                tracing::error!("Failed to create surface: {e}");
                return false;
            }
        }

        self.window = Some(window);
        true
    }

    /// Keep the surface covering the whole window.
    pub(super) fn sync_surface_bounds(&mut self) {
        let Some(window) = &self.window else { return };
        let Some(surface) = &self.surface else { return };
        if let Err(e) = surface.set_bounds(full_window_bounds(window)) {
            tracing::warn!("Failed to update surface bounds: {e}");
        }
    }

    /// Browser-style shortcuts. The primary modifier is Cmd on macOS and
    /// Ctrl elsewhere.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        let primary = self.modifiers.super_key() || self.modifiers.control_key();
        if !primary {
            return;
        }

        match &event.logical_key {
            Key::Character(c) => match c.as_str() {
                "r" => self.reload_surface(),
                "[" => self.go_back(),
                "]" => self.go_forward(),
                "h" if self.modifiers.shift_key() => self.load_home(),
                _ => {}
            },
            _ => {}
        }
    }
}

fn full_window_bounds(window: &Window) -> wry::Rect {
    let size = window.inner_size();
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
    }
}
