//! Runtime capability probing

use folio_core::Capabilities;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

/// Probe the browser for smooth scrolling and `IntersectionObserver`
#[must_use]
pub fn probe(window: &Window, document: &Document) -> Capabilities {
    Capabilities {
        smooth_scroll: supports_smooth_scroll(document),
        visibility_observer: has_property(window, "IntersectionObserver"),
    }
}

/// `'scrollBehavior' in document.documentElement.style`
fn supports_smooth_scroll(document: &Document) -> bool {
    document
        .document_element()
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
        .is_some_and(|root| has_property(&root.style(), "scrollBehavior"))
}

fn has_property(target: &JsValue, name: &str) -> bool {
    Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}
