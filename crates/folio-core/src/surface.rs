//! Presentation surface for the page chrome
//!
//! The controller never touches the DOM directly. It issues class and scroll
//! operations against a [`Surface`], which the browser crate implements over
//! `web-sys` and tests implement with [`RecordingSurface`].

use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Fixed elements of the page chrome the controller mutates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Landmark {
    /// The top navigation bar (gains the scrolled class)
    Navigation,
    /// The collapsible mobile menu panel
    MobileMenu,
    /// The hamburger/close icon inside the menu button
    MenuIcon,
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navigation => write!(f, "navigation"),
            Self::MobileMenu => write!(f, "mobile-menu"),
            Self::MenuIcon => write!(f, "menu-icon"),
        }
    }
}

/// Operations the controller performs on the rendered page
///
/// Implementations silently ignore landmarks that do not exist.
pub trait Surface {
    /// Add a single class to a landmark's class list
    fn add_class(&mut self, landmark: Landmark, class: &str);

    /// Remove a single class from a landmark's class list
    fn remove_class(&mut self, landmark: Landmark, class: &str);

    /// Replace a landmark's entire class attribute
    fn set_class_name(&mut self, landmark: Landmark, class_name: &str);

    /// Smoothly scroll the element with `section_id` into view
    ///
    /// Returns `false` when no such element exists.
    fn scroll_into_view(&mut self, section_id: &str) -> bool;
}

/// A single recorded surface operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    AddClass(Landmark, String),
    RemoveClass(Landmark, String),
    SetClassName(Landmark, String),
    ScrollIntoView(String),
}

/// In-memory surface that records every operation and tracks class lists
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    classes: HashMap<Landmark, BTreeSet<String>>,
    sections: BTreeSet<String>,
}

impl RecordingSurface {
    /// Create an empty surface with no scrollable sections
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register section ids that `scroll_into_view` will find
    #[must_use]
    pub fn with_sections<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Start a landmark with an initial class attribute
    #[must_use]
    pub fn with_class_name(mut self, landmark: Landmark, class_name: &str) -> Self {
        self.classes.insert(landmark, split_classes(class_name));
        self
    }

    /// Every operation issued so far, in order
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Forget recorded operations but keep class state
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Whether a landmark currently carries `class`
    #[must_use]
    pub fn has_class(&self, landmark: Landmark, class: &str) -> bool {
        self.classes
            .get(&landmark)
            .is_some_and(|set| set.contains(class))
    }

    /// The landmark's class attribute, space separated in sorted order
    #[must_use]
    pub fn class_name(&self, landmark: Landmark) -> String {
        self.classes
            .get(&landmark)
            .map(|set| set.iter().cloned().collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }
}

fn split_classes(class_name: &str) -> BTreeSet<String> {
    class_name.split_whitespace().map(str::to_string).collect()
}

impl Surface for RecordingSurface {
    fn add_class(&mut self, landmark: Landmark, class: &str) {
        self.ops.push(SurfaceOp::AddClass(landmark, class.to_string()));
        self.classes
            .entry(landmark)
            .or_default()
            .insert(class.to_string());
    }

    fn remove_class(&mut self, landmark: Landmark, class: &str) {
        self.ops
            .push(SurfaceOp::RemoveClass(landmark, class.to_string()));
        if let Some(set) = self.classes.get_mut(&landmark) {
            set.remove(class);
        }
    }

    fn set_class_name(&mut self, landmark: Landmark, class_name: &str) {
        self.ops
            .push(SurfaceOp::SetClassName(landmark, class_name.to_string()));
        self.classes.insert(landmark, split_classes(class_name));
    }

    fn scroll_into_view(&mut self, section_id: &str) -> bool {
        if self.sections.contains(section_id) {
            self.ops
                .push(SurfaceOp::ScrollIntoView(section_id.to_string()));
            true
        } else {
            false
        }
    }
}
