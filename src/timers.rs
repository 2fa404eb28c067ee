//! Owned browser timer handles
//!
//! Wraps setInterval/setTimeout ids together with their callbacks so a
//! timer is cancelled when its handle is dropped. Replacing a handle stored
//! in an `Option` slot drops, and thereby cancels, the previous timer.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// A repeating timer owned by the widget
pub struct IntervalHandle {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalHandle {
    pub fn new(window: &Window, callback: Closure<dyn FnMut()>, interval_ms: i32) -> Option<Self> {
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                interval_ms,
            )
            .ok()?;
        Some(Self {
            id,
            _callback: callback,
        })
    }

    /// Stop the timer. Dropping the handle has the same effect.
    pub fn cancel(self) {}
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

/// A one-shot timer owned by the widget. Dropping after the callback has
/// fired only releases the callback.
pub struct TimeoutHandle {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl TimeoutHandle {
    pub fn new(window: &Window, callback: Closure<dyn FnMut()>, timeout_ms: i32) -> Option<Self> {
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout_ms,
            )
            .ok()?;
        Some(Self {
            id,
            _callback: callback,
        })
    }

    /// Stop the timer. Dropping the handle has the same effect.
    pub fn cancel(self) {}
}

impl Drop for TimeoutHandle {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}
