//! DOM access and the browser implementation of [`Surface`]

use folio_core::config::Landmarks;
use folio_core::{Landmark, Surface};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window,
};

use crate::error::{WebError, describe};

/// The global window
///
/// # Errors
///
/// Returns [`WebError::WindowNotAvailable`] outside a browser context.
pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::WindowNotAvailable)
}

/// The window's document
///
/// # Errors
///
/// Returns [`WebError::DocumentNotAvailable`] if the window has none.
pub fn document(window: &Window) -> Result<Document, WebError> {
    window.document().ok_or(WebError::DocumentNotAvailable)
}

/// First element matching `selector`, if any
///
/// # Errors
///
/// Returns [`WebError::InvalidSelector`] if the browser rejects the selector.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, WebError> {
    document
        .query_selector(selector)
        .map_err(|e| invalid_selector(selector, &e))
}

/// Every element matching `selector`, in document order
///
/// # Errors
///
/// Returns [`WebError::InvalidSelector`] if the browser rejects the selector.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, WebError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| invalid_selector(selector, &e))?;

    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Every HTML element matching `selector`; non-HTML matches (SVG) are skipped
///
/// # Errors
///
/// Returns [`WebError::InvalidSelector`] if the browser rejects the selector.
pub fn query_all_html(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, WebError> {
    Ok(query_all(document, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn invalid_selector(selector: &str, err: &wasm_bindgen::JsValue) -> WebError {
    WebError::InvalidSelector {
        selector: selector.to_string(),
        reason: describe(err),
    }
}

/// Surface backed by the live document
///
/// Landmarks are resolved once at construction; missing ones turn the
/// corresponding operations into no-ops.
pub struct DomSurface {
    document: Document,
    navigation: Option<Element>,
    mobile_menu: Option<Element>,
    menu_icon: Option<Element>,
}

impl DomSurface {
    /// Look up the landmark elements by id
    #[must_use]
    pub fn resolve(document: &Document, landmarks: &Landmarks) -> Self {
        let lookup = |id: &str| {
            let found = document.get_element_by_id(id);
            if found.is_none() {
                debug!(id, "landmark missing; its behaviour is disabled");
            }
            found
        };

        Self {
            document: document.clone(),
            navigation: lookup(&landmarks.navigation_id),
            mobile_menu: lookup(&landmarks.mobile_menu_id),
            menu_icon: lookup(&landmarks.menu_icon_id),
        }
    }

    /// The element behind a landmark, if present
    #[must_use]
    pub const fn element(&self, landmark: Landmark) -> Option<&Element> {
        match landmark {
            Landmark::Navigation => self.navigation.as_ref(),
            Landmark::MobileMenu => self.mobile_menu.as_ref(),
            Landmark::MenuIcon => self.menu_icon.as_ref(),
        }
    }
}

impl Surface for DomSurface {
    fn add_class(&mut self, landmark: Landmark, class: &str) {
        let Some(el) = self.element(landmark) else {
            return;
        };
        if let Err(e) = el.class_list().add_1(class) {
            warn!(%landmark, class, error = %describe(&e), "failed to add class");
        }
    }

    fn remove_class(&mut self, landmark: Landmark, class: &str) {
        let Some(el) = self.element(landmark) else {
            return;
        };
        if let Err(e) = el.class_list().remove_1(class) {
            warn!(%landmark, class, error = %describe(&e), "failed to remove class");
        }
    }

    fn set_class_name(&mut self, landmark: Landmark, class_name: &str) {
        if let Some(el) = self.element(landmark) {
            el.set_class_name(class_name);
        }
    }

    fn scroll_into_view(&mut self, section_id: &str) -> bool {
        let Some(target) = self.document.get_element_by_id(section_id) else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
