//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! When a JavaScript event listener is attached through a `Closure`, the
//! closure must live as long as the listener is attached. `closure.forget()`
//! leaks the closure and leaves the listener attached forever.
//!
//! Instead, the closure is stored in a struct that implements `Drop` and
//! removes the listener, tying the listener lifetime to Rust ownership:
//!
//! ```ignore
//! // Listener is attached when DocumentEventListener is created
//! let listener = DocumentEventListener::new(document, "keydown", callback);
//!
//! // Listener is removed when `listener` goes out of scope or is dropped
//! drop(listener);
//! ```
//!
//! With Dioxus signals this becomes an explicit subscribe/unsubscribe pair:
//! store the listener in a `Signal<Option<DocumentEventListener>>`, set it
//! to `Some` to attach and back to `None` to detach. The modal focus trap
//! uses exactly that: attached on open, detached on close.

use wasm_bindgen::prelude::*;

/// A document event listener that removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys::Document,
    event_name: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl DocumentEventListener {
    /// Attach a bubble-phase listener to the document.
    pub fn new(
        document: web_sys::Document,
        event_name: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        Self::attach(document, event_name, false, callback)
    }

    /// Attach a capture-phase listener to the document.
    ///
    /// `focus` does not bubble, so trapping it document-wide only works in
    /// the capture phase.
    pub fn new_capture(
        document: web_sys::Document,
        event_name: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        Self::attach(document, event_name, true, callback)
    }

    fn attach(
        document: web_sys::Document,
        event_name: &'static str,
        capture: bool,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(web_sys::Event)> = Closure::wrap(Box::new(callback));

        if let Err(e) = document.add_event_listener_with_callback_and_bool(
            event_name,
            callback.as_ref().unchecked_ref(),
            capture,
        ) {
            tracing::warn!("failed to attach document {event_name} listener: {e:?}");
        }

        Self {
            document,
            event_name,
            capture,
            callback,
        }
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback_and_bool(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// A window event listener that removes itself when dropped.
///
/// Same pattern as [`DocumentEventListener`], for events that fire on the
/// window (`scroll`, `resize`).
pub struct WindowEventListener {
    window: web_sys::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowEventListener {
    pub fn new(
        window: web_sys::Window,
        event_name: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(web_sys::Event)> = Closure::wrap(Box::new(callback));

        if let Err(e) =
            window.add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
        {
            tracing::warn!("failed to attach window {event_name} listener: {e:?}");
        }

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
