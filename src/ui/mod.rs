//! UI module for pm-widgets
//!
//! This module holds the components, their styling layer and the gallery
//! application that hosts them in a terminal.

pub mod app_component;
pub mod classes;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;
pub mod units;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
