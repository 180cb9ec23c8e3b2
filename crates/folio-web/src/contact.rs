//! Analytics placeholders for contact and store links

use folio_core::config::Selectors;
use folio_core::contact::{self, LinkKind};
use web_sys::{Document, Element};

use crate::dom;
use crate::error::WebError;
use crate::listener::Listener;

/// Instrument the first email link and every store link
///
/// Clicks are only recorded; default navigation proceeds untouched.
///
/// # Errors
///
/// Returns an error if a selector is invalid or a listener cannot be attached.
pub fn instrument(document: &Document, selectors: &Selectors) -> Result<Vec<Listener>, WebError> {
    let email = dom::query(document, &selectors.email_link)?;
    let stores = dom::query_all(document, &selectors.store_link)?;

    email
        .into_iter()
        .map(|link| (link, LinkKind::Email))
        .chain(stores.into_iter().map(|link| (link, LinkKind::StoreListing)))
        .map(|(link, kind)| track(&link, kind))
        .collect()
}

fn track(link: &Element, fallback: LinkKind) -> Result<Listener, WebError> {
    let anchor = link.clone();
    Listener::attach(link, "click", move |_event| {
        let href = anchor.get_attribute("href").unwrap_or_default();
        let kind = contact::classify(&href).unwrap_or(fallback);
        contact::record_click(kind, &href);
    })
}
