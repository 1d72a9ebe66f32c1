//! Core UI functionality shared by every component.
//!
//! - [`actions`] - The [`Action`] message components return instead of invoking callbacks
//! - [`component`] - The [`Component`] trait
//! - [`event_handler`] - Terminal event source for the gallery loop
//! - [`timer`] - Scoped interval timer that stops when dropped
//!
//! A component never calls into its caller. Each caller-supplied callback is an
//! [`Action`] value (or a function producing one) stored in the component's
//! props; handling input returns that action, and the caller dispatches it.
//! An absent callback simply yields [`Action::None`].

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod timer;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use timer::IntervalTimer;
