//! Focus outline for keyboard navigation

use folio_core::config::FocusRing;
use folio_core::focus::StyleChange;
use tracing::warn;
use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::error::{WebError, describe};
use crate::listener::Listener;

/// Attach focus/blur listeners to every element matching `selector`
///
/// # Errors
///
/// Returns an error if the selector is invalid or a listener cannot be attached.
pub fn attach(
    document: &Document,
    selector: &str,
    ring: &FocusRing,
) -> Result<Vec<Listener>, WebError> {
    let mut listeners = Vec::new();

    for element in dom::query_all_html(document, selector)? {
        let focused = element.clone();
        let on_focus = ring.on_focus();
        listeners.push(Listener::attach(&element, "focus", move |_event| {
            apply(&focused, &on_focus);
        })?);

        let blurred = element.clone();
        let on_blur = ring.on_blur();
        listeners.push(Listener::attach(&element, "blur", move |_event| {
            apply(&blurred, &on_blur);
        })?);
    }

    Ok(listeners)
}

fn apply(element: &HtmlElement, changes: &[StyleChange]) {
    let style = element.style();
    for change in changes {
        if let Err(e) = style.set_property(change.property, &change.value) {
            warn!(property = change.property, error = %describe(&e), "failed to set focus style");
        }
    }
}
