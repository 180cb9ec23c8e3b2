//! Configuration loading
//!
//! The page may embed its configuration as
//! `<script id="folio-config" type="application/json">{ ... }</script>`.
//! Without one, defaults apply.

use folio_core::FolioConfig;
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::error::WebError;

/// Id of the inline JSON config element
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Read the inline config element, if the page has one
///
/// # Errors
///
/// Returns [`WebError::Config`] if the element's JSON is malformed or invalid.
pub fn load_inline(document: &Document) -> Result<Option<FolioConfig>, WebError> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let json = element.text_content().unwrap_or_default();
    Ok(Some(FolioConfig::from_json(&json)?))
}

/// Convert a JS object into a validated config
///
/// # Errors
///
/// Returns [`WebError::Config`] if the object does not deserialize or fails
/// validation.
pub fn from_js(value: JsValue) -> Result<FolioConfig, WebError> {
    let config: FolioConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| folio_core::Error::config_parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
