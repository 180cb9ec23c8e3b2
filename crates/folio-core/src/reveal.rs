//! One-shot reveal bookkeeping
//!
//! Visibility observers report every intersection change; each watched
//! element must be acted on at most once. [`FireOnce`] tracks which elements
//! are still armed, and the plan types describe what to do when one fires.

/// Per-element arming flags for a group of watched elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireOnce {
    armed: Vec<bool>,
    remaining: usize,
}

impl FireOnce {
    /// Arm `count` elements, indexed `0..count`
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            armed: vec![true; count],
            remaining: count,
        }
    }

    /// Disarm `index` and report whether this call is the one that fired
    ///
    /// Returns `false` for already fired or out-of-range indices.
    pub fn fire(&mut self, index: usize) -> bool {
        match self.armed.get_mut(index) {
            Some(slot) if *slot => {
                *slot = false;
                self.remaining = self.remaining.saturating_sub(1);
                true
            }
            _ => false,
        }
    }

    /// Whether `index` has not fired yet
    #[cfg(test)]
    #[must_use]
    pub fn is_armed(&self, index: usize) -> bool {
        self.armed.get(index).copied().unwrap_or(false)
    }

    /// Number of elements still waiting to fire
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Whether every element has fired
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Width animation for a skill bar entering the viewport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBarAnimation {
    /// Width applied immediately
    pub collapsed: &'static str,
    /// The bar's declared width, restored after `delay_ms`
    pub target: String,
    pub delay_ms: u32,
}

impl SkillBarAnimation {
    /// Plan the collapse-then-grow animation for a bar's declared width
    #[must_use]
    pub fn plan(declared_width: &str, delay_ms: u32) -> Self {
        Self {
            collapsed: "0%",
            target: declared_width.to_string(),
            delay_ms,
        }
    }
}

/// Source swap for a deferred image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePromotion {
    /// Value to assign to `src`
    pub src: String,
    /// Marker class to drop once loading starts
    pub remove_class: String,
}

impl ImagePromotion {
    /// Plan the promotion of a deferred source
    ///
    /// A missing attribute promotes an empty string.
    #[must_use]
    pub fn plan(deferred_src: Option<String>, lazy_class: &str) -> Self {
        Self {
            src: deferred_src.unwrap_or_default(),
            remove_class: lazy_class.to_string(),
        }
    }
}
