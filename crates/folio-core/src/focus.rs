//! Visible focus ring for keyboard users

use crate::config::FocusRing;

/// A single inline style property assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleChange {
    pub property: &'static str,
    pub value: String,
}

impl StyleChange {
    fn new(property: &'static str, value: &str) -> Self {
        Self {
            property,
            value: value.to_string(),
        }
    }
}

impl FocusRing {
    /// Styles applied when an element gains focus
    #[must_use]
    pub fn on_focus(&self) -> [StyleChange; 2] {
        [
            StyleChange::new("outline", &self.outline),
            StyleChange::new("outline-offset", &self.outline_offset),
        ]
    }

    /// Styles applied when an element loses focus
    ///
    /// Only the outline is cleared; the offset is harmless without it.
    #[must_use]
    pub fn on_blur(&self) -> [StyleChange; 1] {
        [StyleChange::new("outline", "none")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ring() {
        let ring = FocusRing::default();
        let [outline, offset] = ring.on_focus();
        assert_eq!(outline.property, "outline");
        assert_eq!(outline.value, "2px solid #3b82f6");
        assert_eq!(offset.property, "outline-offset");
        assert_eq!(offset.value, "2px");
    }

    #[test]
    fn test_blur_clears_outline() {
        let [outline] = FocusRing::default().on_blur();
        assert_eq!(outline.value, "none");
    }
}
