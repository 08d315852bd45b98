//! Window-local geometry: position, size, minimize flag and the active pointer gesture.
//!
//! Everything here is pure so the clamping rules can be exercised without a DOM. The Leptos
//! window component owns one [`WindowGeometry`] per mounted window and feeds it pointer events.

use desktop_app_contract::ContentSize;

use crate::model::{Point, Size, Viewport};

/// Smallest scale applied to a title that does not fit its title bar.
pub const TITLE_SCALE_FLOOR: f64 = 0.6;
/// Title bar width reserved for the app icon and the control buttons.
pub const TITLE_CHROME_BUDGET_PX: i32 = 96;
/// Average glyph advance of the title bar font, used to estimate rendered title width.
pub const TITLE_GLYPH_WIDTH_PX: f64 = 7.5;

/// Fixed bounds applied to every geometry update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryLimits {
    pub min_size: Size,
    pub title_bar_height: i32,
}

/// Clamps a dragged position so the title bar stays reachable inside `viewport`.
///
/// When the window is wider than the viewport the left edge wins and `x` is pinned at `0`.
pub fn clamp_position(raw: Point, size: Size, viewport: Viewport, title_bar_height: i32) -> Point {
    let max_x = (viewport.width - size.width).max(0);
    let max_y = (viewport.height - title_bar_height).max(0);
    Point {
        x: raw.x.clamp(0, max_x),
        y: raw.y.clamp(0, max_y),
    }
}

/// Enforces the minimum window size.
pub fn clamp_size(raw: Size, min_size: Size) -> Size {
    raw.clamped_min(min_size)
}

/// Display scale for `title` in a window `window_width` wide, in `[TITLE_SCALE_FLOOR, 1.0]`.
pub fn title_scale(title: &str, window_width: i32) -> f64 {
    let text_width = title.chars().count() as f64 * TITLE_GLYPH_WIDTH_PX;
    if text_width <= 0.0 {
        return 1.0;
    }
    let available = f64::from(window_width - TITLE_CHROME_BUDGET_PX);
    (available / text_width).clamp(TITLE_SCALE_FLOOR, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Title bar drag; `anchor` is the pointer offset from the window origin at drag start.
    Dragging { anchor: Point },
    /// Corner resize measured from the pointer and size at gesture start.
    Resizing { pointer_start: Point, size_start: Size },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub position: Point,
    pub size: Size,
    pub minimized: bool,
    gesture: Gesture,
}

impl WindowGeometry {
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            minimized: false,
            gesture: Gesture::Idle,
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture != Gesture::Idle
    }

    /// Starts a title bar drag. Returns `true` when the drag began (the caller raises the window).
    ///
    /// Refused when the window is not draggable or another gesture is in progress.
    pub fn begin_drag(&mut self, pointer: Point, draggable: bool) -> bool {
        if !draggable || self.is_gesture_active() {
            return false;
        }
        self.gesture = Gesture::Dragging {
            anchor: pointer.offset_from(self.position),
        };
        true
    }

    /// Starts a corner resize. Returns `true` when the resize began.
    ///
    /// Refused when the window is not resizable, minimized, or another gesture is in progress.
    pub fn begin_resize(&mut self, pointer: Point, resizable: bool) -> bool {
        if !resizable || self.minimized || self.is_gesture_active() {
            return false;
        }
        self.gesture = Gesture::Resizing {
            pointer_start: pointer,
            size_start: self.size,
        };
        true
    }

    /// Applies a pointer move to the active gesture. Returns `true` when geometry changed.
    pub fn pointer_move(&mut self, pointer: Point, viewport: Viewport, limits: GeometryLimits) -> bool {
        let before = (self.position, self.size);
        match self.gesture {
            Gesture::Idle => return false,
            Gesture::Dragging { anchor } => {
                let raw = pointer.offset_from(anchor);
                self.position = clamp_position(raw, self.size, viewport, limits.title_bar_height);
            }
            Gesture::Resizing {
                pointer_start,
                size_start,
            } => {
                let delta = pointer.offset_from(pointer_start);
                let raw = Size::new(size_start.width + delta.x, size_start.height + delta.y);
                self.size = clamp_size(raw, limits.min_size);
            }
        }
        before != (self.position, self.size)
    }

    /// Ends any active gesture. Returns `true` when one was active.
    pub fn end_gesture(&mut self) -> bool {
        let was_active = self.is_gesture_active();
        self.gesture = Gesture::Idle;
        was_active
    }

    /// Flips the minimized flag and returns the new value.
    pub fn toggle_minimized(&mut self) -> bool {
        self.minimized = !self.minimized;
        if self.minimized && matches!(self.gesture, Gesture::Resizing { .. }) {
            self.gesture = Gesture::Idle;
        }
        self.minimized
    }

    /// Re-clamps position after the viewport itself changed size.
    pub fn fit_to_viewport(&mut self, viewport: Viewport, limits: GeometryLimits) -> bool {
        let clamped = clamp_position(self.position, self.size, viewport, limits.title_bar_height);
        let changed = clamped != self.position;
        self.position = clamped;
        changed
    }

    /// Outer height actually painted: the title bar alone while minimized.
    pub fn rendered_height(&self, title_bar_height: i32) -> i32 {
        if self.minimized {
            title_bar_height
        } else {
            self.size.height
        }
    }

    /// Size of the content box below the title bar.
    pub fn content_size(&self, title_bar_height: i32) -> ContentSize {
        if self.minimized {
            ContentSize::new(self.size.width, 0)
        } else {
            ContentSize::new(self.size.width, self.size.height - title_bar_height)
        }
    }
}
