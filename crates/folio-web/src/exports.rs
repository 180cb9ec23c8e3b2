//! Functions published to JavaScript
//!
//! Inline markup calls these by their bare names
//! (`onclick="scrollToSection('about')"`), so besides the module exports
//! they are installed on `window` and grouped under
//! `window.portfolioFunctions`.

use js_sys::{Object, Reflect};
use tracing::trace;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Window;

use crate::error::WebError;
use crate::page;

/// Name of the namespace object on `window`
pub const NAMESPACE: &str = "portfolioFunctions";

/// Scroll a section into view and close the mobile menu
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) {
    if !page::with_mounted(|c| c.scroll_to_section(section_id)) {
        trace!(section_id, "page not mounted; scroll ignored");
    }
}

/// Open or close the mobile menu
#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() {
    if !page::with_mounted(|c| c.toggle_menu()) {
        trace!("page not mounted; toggle ignored");
    }
}

/// Close the mobile menu if it is open
#[wasm_bindgen(js_name = closeMobileMenu)]
pub fn close_mobile_menu() {
    page::with_mounted(|c| c.close_menu());
}

/// Install the exported functions as window globals and the namespace
///
/// The closures are leaked on purpose: they must outlive every page mount.
///
/// # Errors
///
/// Returns [`WebError::Js`] if a property cannot be set.
pub fn publish(window: &Window) -> Result<(), WebError> {
    let functions = [
        (
            "scrollToSection",
            Closure::<dyn Fn(String)>::new(|id: String| scroll_to_section(&id)).into_js_value(),
        ),
        (
            "toggleMobileMenu",
            Closure::<dyn Fn()>::new(toggle_mobile_menu).into_js_value(),
        ),
        (
            "closeMobileMenu",
            Closure::<dyn Fn()>::new(close_mobile_menu).into_js_value(),
        ),
    ];

    let namespace = Object::new();
    for (name, function) in &functions {
        let key = JsValue::from_str(name);
        set(&namespace, &key, function)?;
        set(window, &key, function)?;
    }
    set(window, &JsValue::from_str(NAMESPACE), &namespace)
}

fn set(target: &JsValue, key: &JsValue, value: &JsValue) -> Result<(), WebError> {
    Reflect::set(target, key, value)
        .map(|_| ())
        .map_err(|e| WebError::js(&e))
}
