//! Browser-independent core of the folio page behaviours
//!
//! The portfolio page reacts to a handful of browser events: scrolling,
//! resizing, clicks, key presses and elements entering the viewport. This
//! crate holds everything about those reactions that does not need a
//! browser, so it can be tested on the host.
//!
//! ## Module Structure
//! - `controller`: menu-open and scrolled state, event handlers
//! - `surface`: presentation interface the controller mutates
//! - `reveal`: fire-once bookkeeping and reveal plans
//! - `capability`: runtime capabilities and the strategies they select
//! - `typing`: hero-title typewriter state machine
//! - `contact`: outbound link classification and analytics events
//! - `focus`: focus ring styles
//! - `config`: page configuration
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod capability;
pub mod config;
pub mod contact;
pub mod controller;
pub mod error;
pub mod focus;
pub mod reveal;
pub mod surface;
pub mod typing;

pub use capability::{Capabilities, LazyLoadStrategy, RevealStrategy, ScrollStrategy};
pub use config::FolioConfig;
pub use controller::{Controller, MenuState, ScrollTransition};
pub use error::{Error, Result};
pub use surface::{Landmark, RecordingSurface, Surface, SurfaceOp};

#[cfg(test)]
mod tests;
