//! Browser bindings for the folio page behaviours
//!
//! Compiles to WASM and wires `folio-core` to the live DOM: event
//! listeners, intersection observers, timers and the JS globals inline
//! markup relies on.
//!
//! ## Architecture
//! - Pure logic lives in `folio-core`; this crate only adapts it
//! - One [`page::Page`] per document, held in a thread-local
//! - Every init step is fallible and isolated from the others
//!
//! ## Module Structure
//! - `page`: init sequence and page lifetime
//! - `dom`: DOM helpers and the `Surface` implementation
//! - `listener` / `observer`: owned event and visibility subscriptions
//! - `reveal`, `contact`, `focus`, `scroll_fallback`, `typing`: behaviours
//! - `exports`: functions published to JavaScript
//! - `config`, `logging`, `banner`, `capability`, `error`: plumbing

pub mod banner;
pub mod capability;
pub mod config;
pub mod contact;
pub mod dom;
pub mod error;
pub mod exports;
pub mod focus;
pub mod listener;
pub mod logging;
pub mod observer;
pub mod page;
pub mod reveal;
pub mod scroll_fallback;
pub mod typing;

use folio_core::FolioConfig;
use tracing::warn;
use wasm_bindgen::prelude::*;

pub use error::WebError;

/// Module entry point: configure logging, publish globals, mount the page
///
/// # Errors
///
/// Fails only outside a browser context or if the globals cannot be set.
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = dom::window()?;
    let document = dom::document(&window)?;
    let (config, rejected) = match config::load_inline(&document) {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (FolioConfig::default(), Some(e)),
    };

    logging::init(&config.logging);
    if let Some(e) = rejected {
        warn!(error = %e, "inline config rejected; using defaults");
    }

    exports::publish(&window)?;
    banner::print(&config.banner);
    page::mount_when_ready(config)?;
    Ok(())
}

/// Re-mount the page with a config object supplied from JavaScript
///
/// # Errors
///
/// Returns the validation message if the config is rejected.
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(config: JsValue) -> Result<(), JsValue> {
    let config = config::from_js(config)?;
    page::mount(&config)?;
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_test;

#[cfg(all(test, target_arch = "wasm32"))]
mod page_test;
