//! Tests for the DOM surface and helpers
//!
//! Note: These tests require a WASM environment with DOM access.
//! Run with: wasm-pack test --headless --firefox

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::cell::Cell;
use std::rc::Rc;

use folio_core::config::Landmarks;
use gloo_timers::future::TimeoutFuture;
use folio_core::{Controller, FolioConfig, Landmark, Surface};
use wasm_bindgen_test::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom::{self, DomSurface};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    dom::document(&dom::window().expect("should have window")).expect("should have document")
}

fn append(document: &Document, tag: &str, id: &str, class: &str) -> Element {
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    element.set_class_name(class);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn landmarks(prefix: &str) -> Landmarks {
    Landmarks {
        navigation_id: format!("{prefix}-nav"),
        mobile_menu_id: format!("{prefix}-menu"),
        menu_icon_id: format!("{prefix}-icon"),
        nav_region_selector: format!("#{prefix}-nav"),
    }
}

#[wasm_bindgen_test]
fn test_surface_toggles_real_classes() {
    let doc = document();
    let menu = append(&doc, "div", "dom1-menu", "mobile-menu");
    let icon = append(&doc, "i", "dom1-icon", "fas fa-bars");
    append(&doc, "nav", "dom1-nav", "nav");

    let mut config = FolioConfig::default();
    config.landmarks = landmarks("dom1");
    let surface = DomSurface::resolve(&doc, &config.landmarks);
    let mut ctrl = Controller::new(surface, &config);

    ctrl.toggle_menu();
    assert!(menu.class_list().contains("active"));
    assert_eq!(icon.class_name(), "fas fa-times");

    ctrl.toggle_menu();
    assert!(!menu.class_list().contains("active"));
    assert_eq!(icon.class_name(), "fas fa-bars");
}

#[wasm_bindgen_test]
fn test_surface_scrolled_class() {
    let doc = document();
    let nav = append(&doc, "nav", "dom2-nav", "nav");

    let mut config = FolioConfig::default();
    config.landmarks = landmarks("dom2");
    let mut ctrl = Controller::new(DomSurface::resolve(&doc, &config.landmarks), &config);

    ctrl.on_scroll(150.0);
    assert!(nav.class_list().contains("scrolled"));
    ctrl.on_scroll(50.0);
    assert!(!nav.class_list().contains("scrolled"));
}

#[wasm_bindgen_test]
fn test_missing_landmarks_are_no_ops() {
    let doc = document();
    let mut surface = DomSurface::resolve(&doc, &landmarks("absent"));

    assert!(surface.element(Landmark::Navigation).is_none());
    surface.add_class(Landmark::Navigation, "scrolled");
    surface.set_class_name(Landmark::MenuIcon, "fas fa-times");
    assert!(!surface.scroll_into_view("absent-section"));
}

#[wasm_bindgen_test]
fn test_scroll_into_view_finds_section() {
    let doc = document();
    append(&doc, "section", "dom4-section", "");
    let mut surface = DomSurface::resolve(&doc, &landmarks("dom4"));

    assert!(surface.scroll_into_view("dom4-section"));
}

#[wasm_bindgen_test]
fn test_query_all_in_document_order() {
    let doc = document();
    append(&doc, "div", "dom5-a", "dom5-item");
    append(&doc, "div", "dom5-b", "dom5-item");

    let found = dom::query_all(&doc, ".dom5-item").unwrap();
    let ids: Vec<String> = found.iter().map(Element::id).collect();
    assert_eq!(ids, vec!["dom5-a", "dom5-b"]);
}

#[wasm_bindgen_test]
fn test_invalid_selector_is_error() {
    let doc = document();
    let result = dom::query_all(&doc, "[[[");
    assert!(matches!(
        result,
        Err(crate::WebError::InvalidSelector { .. })
    ));
}

#[wasm_bindgen_test]
fn test_once_observer_starts_with_every_target_pending() {
    let doc = document();
    let targets = vec![
        doc.create_element("div").unwrap(),
        doc.create_element("div").unwrap(),
    ];

    let observer = crate::observer::OnceObserver::watch(targets, 0.5, |_| {}).unwrap();

    assert_eq!(observer.pending(), 2);
    observer.disconnect();
}

#[wasm_bindgen_test]
async fn test_once_observer_reveals_visible_target_once_then_finishes() {
    let doc = document();
    let target = doc.create_element("div").unwrap();
    target
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .set_css_text("position: fixed; top: 0; left: 0; width: 20px; height: 20px;");
    doc.body().unwrap().append_child(&target).unwrap();

    let hits = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&hits);
    let observer = crate::observer::OnceObserver::watch(vec![target.clone()], 0.0, move |_| {
        counter.set(counter.get() + 1);
    })
    .unwrap();

    TimeoutFuture::new(300).await;

    assert_eq!(hits.get(), 1);
    assert_eq!(observer.pending(), 0);
    assert!(observer.is_done());
    target.remove();
}
