//! Browser environment queries used by the window components.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::model::{Point, Viewport};

const FALLBACK_WIDTH: i32 = 1024;
const FALLBACK_HEIGHT: i32 = 768;

/// Desktop area above the taskbar, in CSS pixels.
pub fn desktop_viewport(taskbar_height_px: i32) -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_WIDTH);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_HEIGHT);

            return Viewport::new(width.max(320), (height - taskbar_height_px).max(220));
        }
    }

    Viewport::new(FALLBACK_WIDTH, FALLBACK_HEIGHT - taskbar_height_px)
}

pub fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> Point {
    Point::new(ev.client_x(), ev.client_y())
}

/// Only the primary mouse button or the primary touch/pen contact starts a gesture.
pub fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[cfg(target_arch = "wasm32")]
pub fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}
