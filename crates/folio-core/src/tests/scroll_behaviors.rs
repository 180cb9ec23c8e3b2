//! Behavioral tests for the scrolled navigation state

use crate::config::FolioConfig;
use crate::controller::{Controller, ScrollTransition};
use crate::surface::{Landmark, RecordingSurface};

fn unscrolled() -> Controller<RecordingSurface> {
    Controller::new(RecordingSurface::new(), &FolioConfig::default())
}

#[test]
fn given_top_of_page_when_scrolled_to_50_then_no_scrolled_class() {
    let mut ctrl = unscrolled();

    assert_eq!(ctrl.on_scroll(50.0), None);

    assert!(!ctrl.surface().has_class(Landmark::Navigation, "scrolled"));
}

#[test]
fn given_top_of_page_when_scrolled_to_150_and_back_then_class_follows() {
    let mut ctrl = unscrolled();

    ctrl.on_scroll(50.0);
    assert!(!ctrl.surface().has_class(Landmark::Navigation, "scrolled"));

    ctrl.on_scroll(150.0);
    assert!(ctrl.surface().has_class(Landmark::Navigation, "scrolled"));

    ctrl.on_scroll(50.0);
    assert!(!ctrl.surface().has_class(Landmark::Navigation, "scrolled"));
}

#[test]
fn given_threshold_when_offset_is_exactly_100_then_not_scrolled() {
    let mut ctrl = unscrolled();

    ctrl.on_scroll(100.0);

    assert!(!ctrl.is_scrolled());
    assert!(!ctrl.surface().has_class(Landmark::Navigation, "scrolled"));
}

#[test]
fn given_threshold_when_offset_is_101_then_scrolled() {
    let mut ctrl = unscrolled();

    assert_eq!(ctrl.on_scroll(101.0), Some(ScrollTransition::Scrolled));

    assert!(ctrl.surface().has_class(Landmark::Navigation, "scrolled"));
}

#[test]
fn given_scrolled_page_when_offset_stays_put_then_no_redundant_mutations() {
    let mut ctrl = unscrolled();
    ctrl.on_scroll(300.0);
    ctrl.surface_mut().clear_ops();

    for _ in 0..10 {
        assert_eq!(ctrl.on_scroll(300.0), None);
    }
    ctrl.on_scroll(250.0);

    assert!(ctrl.surface().ops().is_empty());
}

#[test]
fn given_scrolled_page_when_menu_toggled_then_scroll_class_kept() {
    let mut ctrl = unscrolled();
    ctrl.on_scroll(300.0);

    ctrl.toggle_menu();
    ctrl.toggle_menu();

    assert!(ctrl.surface().has_class(Landmark::Navigation, "scrolled"));
}
