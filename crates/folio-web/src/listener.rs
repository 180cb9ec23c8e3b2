//! Event listener handles
//!
//! A [`Listener`] owns the closure it registered, so the callback stays alive
//! exactly as long as the handle does. Dropping a handle without calling
//! [`Listener::remove`] leaves a dangling JS callback; the page keeps every
//! handle until teardown.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::WebError;

/// A registered event listener and the closure behind it
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `handler` for `event` on `target`
    ///
    /// # Errors
    ///
    /// Returns [`WebError::ListenerFailed`] if the browser rejects the listener.
    pub fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, WebError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| WebError::listener(event, &e))?;

        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Event name this listener is registered for
    #[must_use]
    pub const fn event(&self) -> &'static str {
        self.event
    }

    /// Unregister the listener and release its closure
    ///
    /// # Errors
    ///
    /// Returns [`WebError::ListenerFailed`] if removal fails.
    pub fn remove(self) -> Result<(), WebError> {
        self.target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
            .map_err(|e| WebError::listener(self.event, &e))
    }
}
