//! Utility modules for pm-widgets.
//!
//! - [`color`] - Utility-class palette names to terminal colors
//! - [`datetime`] - Calendar helpers used by the footer

pub mod color;
pub mod datetime;
