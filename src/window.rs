use std::sync::Arc;

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{CursorGrabMode, Fullscreen, Window as WinitWindow};

use crate::config::WindowSettings;
use crate::core::window::WindowDimensions;
use crate::traits::window::WindowContext;

/// Wrapper around winit Window
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    /// Open a window described by `settings`
    pub fn create(event_loop: &ActiveEventLoop, settings: &WindowSettings) -> Result<Self> {
        let mut attributes = WinitWindow::default_attributes()
            .with_title(settings.title.clone())
            .with_inner_size(LogicalSize::new(settings.width, settings.height));
        if settings.fullscreen {
            attributes = attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = event_loop
            .create_window(attributes)
            .context("Failed to create window")?;
        log::info!(
            "Created window \"{}\" ({}x{}, fullscreen: {})",
            settings.title,
            settings.width,
            settings.height,
            settings.fullscreen
        );
        Ok(Self::new(Arc::new(window)))
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }
}

impl WindowContext for Window {
    fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    fn dimensions(&self) -> WindowDimensions {
        self.inner.inner_size().into()
    }

    fn set_title(&self, title: &str) {
        self.inner.set_title(title);
    }

    fn set_cursor_captured(&self, captured: bool) {
        if captured {
            // Not every platform supports both modes
            if let Err(locked) = self.inner.set_cursor_grab(CursorGrabMode::Locked) {
                if let Err(confined) = self.inner.set_cursor_grab(CursorGrabMode::Confined) {
                    log::warn!(
                        "failed to grab cursor (locked: {}, confined: {})",
                        locked,
                        confined
                    );
                }
            }
        } else if let Err(e) = self.inner.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("failed to release cursor: {}", e);
        }
        self.inner.set_cursor_visible(!captured);
    }
}
