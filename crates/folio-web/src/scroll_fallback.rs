//! Manual smooth scrolling for browsers without CSS `scroll-behavior`

use folio_core::ScrollStrategy;
use folio_core::capability::parse_scroll_target;
use folio_core::config::Selectors;
use tracing::{debug, trace};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;
use crate::error::WebError;
use crate::listener::Listener;

/// Intercept section navigation buttons when the strategy asks for it
///
/// With [`ScrollStrategy::Native`] nothing is attached.
///
/// # Errors
///
/// Returns an error if the selector is invalid or a listener cannot be attached.
pub fn install(
    window: &Window,
    document: &Document,
    selectors: &Selectors,
    strategy: ScrollStrategy,
) -> Result<Vec<Listener>, WebError> {
    if strategy == ScrollStrategy::Native {
        return Ok(Vec::new());
    }
    debug!(?strategy, "installing legacy scroll fallback");

    dom::query_all(document, &selectors.scroll_trigger)?
        .into_iter()
        .map(|trigger| {
            let window = window.clone();
            let document = document.clone();
            let attribute = selectors.scroll_trigger_attribute.clone();
            let button = trigger.clone();
            Listener::attach(&trigger, "click", move |event| {
                event.prevent_default();
                scroll_from_trigger(&window, &document, &button, &attribute, strategy);
            })
        })
        .collect()
}

fn scroll_from_trigger(
    window: &Window,
    document: &Document,
    trigger: &Element,
    attribute: &str,
    strategy: ScrollStrategy,
) {
    let handler = trigger.get_attribute(attribute).unwrap_or_default();
    let Some(target_id) = parse_scroll_target(&handler) else {
        trace!(handler, "no scroll target in handler attribute");
        return;
    };
    let Some(target) = document
        .get_element_by_id(target_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        trace!(target_id, "scroll target not found");
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(strategy.target_top(f64::from(target.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
