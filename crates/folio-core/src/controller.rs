//! Navigation controller
//!
//! Owns the two pieces of page state (menu open, navigation scrolled) and
//! translates browser events into [`Surface`] mutations. One instance per
//! page; every handler goes through it.

use tracing::{debug, trace};

use crate::config::{ClassNames, FolioConfig};
use crate::surface::{Landmark, Surface};

/// Scroll state change produced by [`Controller::on_scroll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTransition {
    /// Offset moved past the threshold
    Scrolled,
    /// Offset returned to or below the threshold
    Restored,
}

/// Mobile menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Whether the menu is open
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    const fn flipped(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

/// Page behaviour controller over a presentation surface
#[derive(Debug)]
pub struct Controller<S> {
    surface: S,
    classes: ClassNames,
    scroll_threshold: f64,
    desktop_breakpoint: f64,
    menu: MenuState,
    scrolled: bool,
}

impl<S: Surface> Controller<S> {
    /// Create a controller with the menu closed and the page unscrolled
    pub fn new(surface: S, config: &FolioConfig) -> Self {
        Self {
            surface,
            classes: config.classes.clone(),
            scroll_threshold: config.motion.scroll_threshold_px,
            desktop_breakpoint: config.motion.desktop_breakpoint_px,
            menu: MenuState::Closed,
            scrolled: false,
        }
    }

    /// Current menu state
    #[must_use]
    pub const fn menu(&self) -> MenuState {
        self.menu
    }

    /// Whether the navigation currently carries the scrolled class
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Borrow the underlying surface
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutably borrow the underlying surface
    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Scroll a section into view and close the mobile menu
    ///
    /// Unknown ids are ignored and leave the menu untouched.
    pub fn scroll_to_section(&mut self, section_id: &str) {
        if self.surface.scroll_into_view(section_id) {
            debug!(section = section_id, "scrolled to section");
            self.close_menu();
        } else {
            trace!(section = section_id, "no such section");
        }
    }

    /// Flip the mobile menu between open and closed
    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.flipped();
        self.render_menu();
        debug!(open = self.menu.is_open(), "mobile menu toggled");
    }

    /// Close the mobile menu if it is open
    pub fn close_menu(&mut self) {
        if self.menu.is_open() {
            self.menu = MenuState::Closed;
            self.render_menu();
            debug!("mobile menu closed");
        }
    }

    fn render_menu(&mut self) {
        if self.menu.is_open() {
            self.surface
                .add_class(Landmark::MobileMenu, &self.classes.menu_active);
            self.surface
                .set_class_name(Landmark::MenuIcon, &self.classes.icon_open);
        } else {
            self.surface
                .remove_class(Landmark::MobileMenu, &self.classes.menu_active);
            self.surface
                .set_class_name(Landmark::MenuIcon, &self.classes.icon_closed);
        }
    }

    /// React to a vertical scroll offset
    ///
    /// The navigation is scrolled strictly past the threshold; an offset equal
    /// to the threshold counts as not scrolled. Returns `None` when the state
    /// did not change, in which case the surface is not touched.
    pub fn on_scroll(&mut self, offset: f64) -> Option<ScrollTransition> {
        let past = offset > self.scroll_threshold;
        if past == self.scrolled {
            return None;
        }

        self.scrolled = past;
        if past {
            self.surface
                .add_class(Landmark::Navigation, &self.classes.scrolled);
            Some(ScrollTransition::Scrolled)
        } else {
            self.surface
                .remove_class(Landmark::Navigation, &self.classes.scrolled);
            Some(ScrollTransition::Restored)
        }
    }

    /// Close the menu when the viewport reaches the desktop breakpoint
    pub fn on_resize(&mut self, viewport_width: f64) {
        if viewport_width >= self.desktop_breakpoint && self.menu.is_open() {
            debug!(viewport_width, "desktop breakpoint reached");
            self.close_menu();
        }
    }

    /// Close the menu on Escape
    pub fn on_key(&mut self, key: &str) {
        if key == "Escape" && self.menu.is_open() {
            self.close_menu();
        }
    }

    /// Close the menu when a click lands outside the navigation region
    pub fn on_document_click(&mut self, inside_navigation: bool) {
        if !inside_navigation && self.menu.is_open() {
            self.close_menu();
        }
    }
}
