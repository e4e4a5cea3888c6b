// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A `winit`-based window wrapper for the viewer.

use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    error::OsError,
    event_loop::ActiveEventLoop,
    window::{CursorGrabMode, Window},
};

/// A wrapper around a `winit::window::Window`.
///
/// Uses an `Arc` internally so the surface can hold a `'static` reference
/// to the window while the event loop keeps its own clone.
#[derive(Debug, Clone)]
pub struct ViewerWindow {
    inner: Arc<Window>,
}

/// A builder for creating [`ViewerWindow`] instances.
pub struct ViewerWindowBuilder {
    title: String,
    width: u32,
    height: u32,
}

impl ViewerWindowBuilder {
    /// Creates a new builder with the viewer's default settings.
    pub fn new() -> Self {
        Self {
            title: "glint".to_string(),
            width: 1200,
            height: 800,
        }
    }

    /// Sets the title of the window to be built.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial inner dimensions of the window to be built.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builds the window using the provided `winit` event loop.
    ///
    /// # Errors
    /// Returns an `OsError` if the underlying `winit` window creation fails.
    pub fn build(self, event_loop: &ActiveEventLoop) -> Result<ViewerWindow, OsError> {
        log::info!(
            "Building window with title: '{}' and size: {}x{}",
            self.title,
            self.width,
            self.height
        );

        let window_attributes = Window::default_attributes()
            .with_title(self.title)
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_visible(true);

        let window = event_loop.create_window(window_attributes)?;
        log::info!("Winit window created successfully (id: {:?}).", window.id());

        Ok(ViewerWindow {
            inner: Arc::new(window),
        })
    }
}

impl Default for ViewerWindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerWindow {
    /// The shared underlying `winit` window.
    pub fn inner(&self) -> &Arc<Window> {
        &self.inner
    }

    /// Physical dimensions (width, height) of the window's inner area.
    pub fn inner_size(&self) -> (u32, u32) {
        let size = self.inner.inner_size();
        (size.width, size.height)
    }

    /// The display's scale factor, used for HiDPI rendering.
    pub fn scale_factor(&self) -> f64 {
        self.inner.scale_factor()
    }

    /// Requests a redraw of the window.
    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    /// Grabs or releases the cursor for mouse look.
    ///
    /// Tries `Locked` first and falls back to `Confined` where the platform
    /// does not support locking (X11). Cursor visibility follows the grab.
    pub fn set_cursor_captured(&self, captured: bool) {
        if captured {
            if let Err(err) = self
                .inner
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| self.inner.set_cursor_grab(CursorGrabMode::Confined))
            {
                log::warn!("Failed to grab the cursor: {err}");
            }
        } else if let Err(err) = self.inner.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("Failed to release the cursor: {err}");
        }
        self.inner.set_cursor_visible(!captured);
    }
}
