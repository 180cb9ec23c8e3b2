//! Styled console greeting

use folio_core::config::BannerConfig;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Print the configured banner lines with their CSS
pub fn print(banner: &BannerConfig) {
    if !banner.enabled {
        return;
    }
    for line in &banner.lines {
        console::log_2(&JsValue::from_str(&line.text), &JsValue::from_str(&line.css));
    }
}
