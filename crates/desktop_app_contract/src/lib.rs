//! Boundary types between a desktop window and the embedded app content it hosts.
//!
//! Embedded apps never see their window's position, size, or stacking order. They receive the
//! measured size of their content area (so canvas-style apps can reflow) and a close callback.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, Signal, SignalGet, View};
use serde::{Deserialize, Serialize};

/// Measured size of a window content area in CSS pixels.
///
/// Height is `0` while the owning window is minimized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentSize {
    /// Content width.
    pub width: i32,
    /// Content height.
    pub height: i32,
}

impl ContentSize {
    /// Creates a content size, flooring negative dimensions at zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Returns `true` when the content area has no drawable surface.
    pub fn is_collapsed(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Clone, Copy)]
/// Runtime-provided context handed to an app when its window mounts.
pub struct AppMountContext {
    /// Stable token of the hosting window (for example `"about"`).
    pub window_id: &'static str,
    /// Resize notifications for the content area. Consecutive identical sizes are not re-emitted.
    pub content_size: Signal<ContentSize>,
    /// Requests that the hosting window close.
    pub close: Callback<()>,
}

impl AppMountContext {
    /// Returns the latest content size, tracking it when called inside a reactive scope.
    pub fn size(&self) -> ContentSize {
        self.content_size.get()
    }

    /// Asks the window manager to close the hosting window.
    pub fn request_close(&self) {
        self.close.call(());
    }
}

/// Static app mount function used by the window catalog.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable app module descriptor.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}
