//! Error types for the browser bindings
//!
//! None of these abort page initialization. Each init step reports its own
//! failure, which is logged and the step skipped.

use wasm_bindgen::JsValue;

/// Errors raised while wiring behaviours to the DOM
#[derive(Debug, Clone, thiserror::Error)]
pub enum WebError {
    /// Not running in a browser window
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    /// The window has no document
    #[error("failed to get document: document is not available")]
    DocumentNotAvailable,

    /// `querySelector`/`querySelectorAll` rejected a selector
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Attaching or removing an event listener failed
    #[error("failed to manage '{event}' listener: {reason}")]
    ListenerFailed { event: String, reason: String },

    /// Creating an `IntersectionObserver` failed
    #[error("failed to create intersection observer: {0}")]
    ObserverFailed(String),

    /// Any other JavaScript exception
    #[error("javascript error: {0}")]
    Js(String),

    /// Configuration was rejected
    #[error(transparent)]
    Config(#[from] folio_core::Error),
}

impl WebError {
    /// Wrap a thrown JS value
    #[must_use]
    pub fn js(value: &JsValue) -> Self {
        Self::Js(describe(value))
    }

    /// Listener failure for `event`
    #[must_use]
    pub fn listener(event: &str, value: &JsValue) -> Self {
        Self::ListenerFailed {
            event: event.to_string(),
            reason: describe(value),
        }
    }
}

/// Best-effort readable form of a thrown JS value
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        Self::from_str(&err.to_string())
    }
}
