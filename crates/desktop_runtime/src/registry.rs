//! Authoritative open/close/focus store for every desktop window.
//!
//! The registry is a total mapping from the closed [`WindowId`] set to [`WindowState`] plus the
//! monotonic `max_z_index` counter. All mutation goes through [`reduce_registry`], which returns
//! the single lifecycle event (if any) the caller must publish once the new state is visible.

use system_ui::IconName;

use crate::model::{WindowId, WindowState, DEFAULT_BASE_Z_INDEX};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Requests accepted by [`reduce_registry`].
pub enum RegistryAction {
    /// Open a window, or raise it when already open.
    Open(WindowId),
    /// Close a window.
    Close(WindowId),
    /// Raise an open window to the front.
    Focus(WindowId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Notification emitted after a registry transition.
pub enum WindowLifecycleEvent {
    /// A window transitioned closed -> open.
    Opened {
        id: WindowId,
        title: &'static str,
        icon: IconName,
    },
    /// A window transitioned open -> closed.
    Closed { id: WindowId },
    /// An open window was raised to the front.
    Focused { id: WindowId },
}

impl WindowLifecycleEvent {
    pub fn opened(id: WindowId) -> Self {
        let descriptor = id.descriptor();
        Self::Opened {
            id,
            title: descriptor.title,
            icon: descriptor.icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRegistry {
    windows: [WindowState; WindowId::COUNT],
    max_z_index: u32,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_Z_INDEX)
    }
}

impl WindowRegistry {
    /// Creates a registry with every window closed and the counter at `base_z_index`.
    pub fn new(base_z_index: u32) -> Self {
        Self {
            windows: [WindowState::default(); WindowId::COUNT],
            max_z_index: base_z_index,
        }
    }

    pub fn state(&self, id: WindowId) -> WindowState {
        self.windows[id.index()]
    }

    pub fn is_open(&self, id: WindowId) -> bool {
        self.state(id).is_open
    }

    pub fn max_z_index(&self) -> u32 {
        self.max_z_index
    }

    /// Open window ids in canonical order.
    pub fn open_windows(&self) -> Vec<WindowId> {
        WindowId::ALL
            .into_iter()
            .filter(|id| self.is_open(*id))
            .collect()
    }

    /// The open window painted on top, if any.
    pub fn frontmost(&self) -> Option<WindowId> {
        WindowId::ALL
            .into_iter()
            .filter(|id| self.is_open(*id))
            .max_by_key(|id| self.state(*id).z_index)
    }

    /// Whether `id` is open and holds the current maximum stacking value.
    pub fn is_frontmost(&self, id: WindowId) -> bool {
        let state = self.state(id);
        state.is_open && state.z_index == self.max_z_index
    }

    pub fn open(&mut self, id: WindowId) -> Option<WindowLifecycleEvent> {
        if self.is_open(id) {
            return self.focus(id);
        }
        let z_index = self.next_z_index();
        self.windows[id.index()] = WindowState {
            is_open: true,
            z_index,
        };
        Some(WindowLifecycleEvent::opened(id))
    }

    pub fn close(&mut self, id: WindowId) -> Option<WindowLifecycleEvent> {
        let state = &mut self.windows[id.index()];
        if !state.is_open {
            return None;
        }
        state.is_open = false;
        Some(WindowLifecycleEvent::Closed { id })
    }

    pub fn focus(&mut self, id: WindowId) -> Option<WindowLifecycleEvent> {
        let state = self.state(id);
        if !state.is_open || state.z_index == self.max_z_index {
            return None;
        }
        let z_index = self.next_z_index();
        self.windows[id.index()].z_index = z_index;
        Some(WindowLifecycleEvent::Focused { id })
    }

    fn next_z_index(&mut self) -> u32 {
        self.max_z_index = self.max_z_index.saturating_add(1);
        debug_assert!(
            self.windows.iter().all(|w| w.z_index <= self.max_z_index),
            "assigned z-index exceeds the registry counter"
        );
        self.max_z_index
    }
}

/// Applies `action` to `registry` and returns the lifecycle event to publish, if any.
///
/// At most one event results from a single action; redundant requests (open-while-open on the
/// frontmost window, close-while-closed, focus-while-frontmost) leave the registry unchanged and
/// return `None`.
pub fn reduce_registry(
    registry: &mut WindowRegistry,
    action: RegistryAction,
) -> Option<WindowLifecycleEvent> {
    match action {
        RegistryAction::Open(id) => registry.open(id),
        RegistryAction::Close(id) => registry.close(id),
        RegistryAction::Focus(id) => registry.focus(id),
    }
}
