//! Behavioral tests for page interactions
//!
//! BDD-style tests using given-when-then naming. They drive a
//! [`Controller`](crate::Controller) over a recording surface and assert on
//! the resulting class state rather than on internals.

mod scroll_behaviors;
