//! Tests for page mounting, listeners and exported functions
//!
//! Note: These tests require a WASM environment with DOM access.
//! Run with: wasm-pack test --headless --firefox

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use folio_core::config::Landmarks;
use folio_core::{FolioConfig, MenuState};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, KeyboardEventInit};

use crate::{dom, exports, page};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    dom::document(&dom::window().expect("should have window")).expect("should have document")
}

/// Builds the page chrome once; ids are shared across tests in this file
fn fixture(doc: &Document) -> (Element, Element) {
    if let (Some(menu), Some(icon)) = (
        doc.get_element_by_id("mobile-menu"),
        doc.get_element_by_id("menu-icon"),
    ) {
        return (menu, icon);
    }

    let body = doc.body().unwrap();
    let nav = doc.create_element("nav").unwrap();
    nav.set_id("navigation");
    nav.set_class_name("nav");
    let icon = doc.create_element("i").unwrap();
    icon.set_id("menu-icon");
    icon.set_class_name("fas fa-bars");
    let menu = doc.create_element("div").unwrap();
    menu.set_id("mobile-menu");
    nav.append_child(&icon).unwrap();
    nav.append_child(&menu).unwrap();
    body.append_child(&nav).unwrap();

    let outside = doc.create_element("div").unwrap();
    outside.set_id("outside");
    body.append_child(&outside).unwrap();

    (menu, icon)
}

/// Menu panel mounted as a sibling of the navigation bar, outside its region
fn detached_menu_config(doc: &Document) -> FolioConfig {
    let mut config = FolioConfig::default();
    config.landmarks = Landmarks {
        navigation_id: "split-nav".to_string(),
        mobile_menu_id: "split-menu".to_string(),
        menu_icon_id: "split-icon".to_string(),
        nav_region_selector: "#split-nav".to_string(),
    };

    if doc.get_element_by_id("split-nav").is_some() {
        return config;
    }

    let body = doc.body().unwrap();
    let nav = doc.create_element("nav").unwrap();
    nav.set_id("split-nav");
    let icon = doc.create_element("i").unwrap();
    icon.set_id("split-icon");
    nav.append_child(&icon).unwrap();
    body.append_child(&nav).unwrap();

    let menu = doc.create_element("div").unwrap();
    menu.set_id("split-menu");
    body.append_child(&menu).unwrap();

    let outside = doc.create_element("div").unwrap();
    outside.set_id("split-outside");
    body.append_child(&outside).unwrap();

    config
}

fn menu_state() -> MenuState {
    page::with_page(|p| p.controller().borrow().menu()).unwrap()
}

fn mounted() -> (Element, Element) {
    let doc = document();
    let elements = fixture(&doc);
    page::mount(&FolioConfig::default()).unwrap();
    elements
}

fn press(doc: &Document, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    doc.dispatch_event(&event).unwrap();
}

fn click(element: &Element) {
    element.dyn_ref::<HtmlElement>().unwrap().click();
}

#[wasm_bindgen_test]
fn test_exported_toggle_round_trip() {
    let (menu, icon) = mounted();

    exports::toggle_mobile_menu();
    assert!(menu.class_list().contains("active"));
    assert_eq!(icon.class_name(), "fas fa-times");

    exports::toggle_mobile_menu();
    assert!(!menu.class_list().contains("active"));
    assert_eq!(icon.class_name(), "fas fa-bars");
}

#[wasm_bindgen_test]
fn test_escape_closes_open_menu() {
    let (menu, _) = mounted();
    let doc = document();

    exports::toggle_mobile_menu();
    press(&doc, "Escape");

    assert_eq!(menu_state(), MenuState::Closed);
    assert!(!menu.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn test_click_outside_navigation_closes_menu() {
    mounted();
    let doc = document();

    exports::toggle_mobile_menu();
    click(&doc.get_element_by_id("outside").unwrap());

    assert_eq!(menu_state(), MenuState::Closed);
}

#[wasm_bindgen_test]
fn test_click_inside_menu_keeps_it_open() {
    let (menu, _) = mounted();

    exports::toggle_mobile_menu();
    click(&menu);

    assert_eq!(menu_state(), MenuState::Open);
    exports::close_mobile_menu();
}

#[wasm_bindgen_test]
fn test_click_on_menu_outside_navigation_keeps_it_open() {
    let doc = document();
    let config = detached_menu_config(&doc);
    page::mount(&config).unwrap();
    let menu = doc.get_element_by_id("split-menu").unwrap();

    exports::toggle_mobile_menu();
    click(&menu);

    assert_eq!(menu_state(), MenuState::Open);
    assert!(menu.class_list().contains("active"));

    click(&doc.get_element_by_id("split-outside").unwrap());

    assert_eq!(menu_state(), MenuState::Closed);
    assert!(!menu.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn test_remount_replaces_listeners() {
    mounted();
    let first = page::with_page(page::Page::listener_count).unwrap();

    page::mount(&FolioConfig::default()).unwrap();
    let second = page::with_page(page::Page::listener_count).unwrap();

    assert_eq!(first, second);
    assert!(page::is_mounted());
}

#[wasm_bindgen_test]
fn test_typing_disabled_by_default() {
    mounted();
    assert!(!page::with_page(page::Page::is_typing).unwrap());
}

#[wasm_bindgen_test]
fn test_publish_installs_namespace() {
    let window = dom::window().unwrap();
    exports::publish(&window).unwrap();

    let namespace = js_sys::Reflect::get(&window, &exports::NAMESPACE.into()).unwrap();
    assert!(namespace.is_object());
    let toggle = js_sys::Reflect::get(&namespace, &"toggleMobileMenu".into()).unwrap();
    assert!(toggle.is_function());
    let global = js_sys::Reflect::get(&window, &"scrollToSection".into()).unwrap();
    assert!(global.is_function());
}

#[wasm_bindgen_test]
fn test_unrelated_event_leaves_menu_alone() {
    mounted();
    let doc = document();

    let event = Event::new("keydown").unwrap();
    doc.dispatch_event(&event).unwrap();

    assert_eq!(menu_state(), MenuState::Closed);
}

#[wasm_bindgen_test]
fn test_modern_browser_capabilities() {
    mounted();
    let caps = page::with_page(page::Page::capabilities).unwrap();

    assert!(caps.visibility_observer);
}
