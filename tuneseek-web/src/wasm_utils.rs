//! Browser interop helpers
//!
//! Event listeners are tied to Rust ownership: `EventListenerGuard` attaches
//! on creation and removes the listener when dropped, so a closure never
//! outlives the thing that owns it and nothing needs `Closure::forget()`.

use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

/// An event listener that removes itself when dropped.
pub struct EventListenerGuard {
    target: EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListenerGuard {
    pub fn new(
        target: EventTarget,
        event_name: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(web_sys::Event)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
