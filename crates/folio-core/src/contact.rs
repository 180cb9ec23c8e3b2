//! Contact link instrumentation
//!
//! Clicks on the email link and store listings are reported as analytics
//! placeholder events. Navigation itself is never intercepted.

use std::fmt;

use tracing::info;

/// Outbound links worth counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// `mailto:` contact link
    Email,
    /// App store listing
    StoreListing,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::StoreListing => write!(f, "store_listing"),
        }
    }
}

/// Host fragment identifying store listing links
pub const STORE_HOST: &str = "play.google.com";

/// Classify an href, mirroring the default link selectors
#[must_use]
pub fn classify(href: &str) -> Option<LinkKind> {
    if href.starts_with("mailto:") {
        Some(LinkKind::Email)
    } else if href.contains(STORE_HOST) {
        Some(LinkKind::StoreListing)
    } else {
        None
    }
}

/// Emit the analytics placeholder for a link click
pub fn record_click(kind: LinkKind, href: &str) {
    match kind {
        LinkKind::Email => info!(target: "folio::analytics", kind = %kind, "email contact initiated"),
        LinkKind::StoreListing => {
            info!(target: "folio::analytics", kind = %kind, href, "store link clicked");
        }
    }
}
