//! Environment capabilities and the strategies they select
//!
//! The browser crate probes the runtime once at start-up and hands the
//! result here; everything downstream matches on the chosen strategy rather
//! than re-probing.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::FolioConfig;

/// Matches `scrollToSection('id')` inside an inline handler attribute
static SCROLL_TARGET: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"scrollToSection\('(.+?)'\)").ok());

/// What the hosting browser supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// CSS `scroll-behavior` is recognised
    pub smooth_scroll: bool,
    /// `IntersectionObserver` exists
    pub visibility_observer: bool,
}

impl Capabilities {
    /// A modern browser with every capability present
    pub const FULL: Self = Self {
        smooth_scroll: true,
        visibility_observer: true,
    };

    /// Select how in-page navigation scrolls
    #[must_use]
    pub const fn scroll_strategy(self, config: &FolioConfig) -> ScrollStrategy {
        if self.smooth_scroll {
            ScrollStrategy::Native
        } else {
            ScrollStrategy::OffsetFallback {
                nav_offset: config.motion.nav_offset_px,
            }
        }
    }

    /// Select how sections and skill bars are revealed
    #[must_use]
    pub const fn reveal_strategy(self) -> RevealStrategy {
        if self.visibility_observer {
            RevealStrategy::Observe
        } else {
            RevealStrategy::Immediate
        }
    }

    /// Select how deferred images are loaded
    #[must_use]
    pub const fn lazy_load_strategy(self, config: &FolioConfig) -> LazyLoadStrategy {
        if self.visibility_observer {
            LazyLoadStrategy::Observe
        } else if config.lazy_images.eager_fallback {
            LazyLoadStrategy::Eager
        } else {
            LazyLoadStrategy::Skip
        }
    }
}

/// In-page navigation scrolling
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollStrategy {
    /// The browser animates `scrollIntoView` itself; nothing to intercept
    Native,
    /// Intercept navigation buttons and scroll the window manually,
    /// leaving room for the fixed navigation bar
    OffsetFallback { nav_offset: f64 },
}

impl ScrollStrategy {
    /// Window offset to scroll to for a target at `offset_top`
    #[must_use]
    pub fn target_top(self, offset_top: f64) -> f64 {
        match self {
            Self::Native => offset_top,
            Self::OffsetFallback { nav_offset } => offset_top - nav_offset,
        }
    }
}

/// Section and skill-bar reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStrategy {
    /// Watch visibility and reveal on first intersection
    Observe,
    /// No observer: fade sections in at once, leave skill bars as declared
    Immediate,
}

/// Deferred image loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyLoadStrategy {
    /// Promote each source on first intersection
    Observe,
    /// Promote every source at start-up
    Eager,
    /// Leave deferred images untouched
    Skip,
}

/// Extract the section id from an inline `scrollToSection('id')` handler
#[must_use]
pub fn parse_scroll_target(handler: &str) -> Option<&str> {
    SCROLL_TARGET
        .as_ref()?
        .captures(handler)?
        .get(1)
        .map(|m| m.as_str())
}
