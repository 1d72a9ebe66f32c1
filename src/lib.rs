//! pm-widgets - presentational terminal UI components
//!
//! This library provides the leaf widgets of a project management front-end,
//! rendered with Ratatui: a styled button, an auto-rotating quote banner, an
//! assignee multi-select, a semantic notification dialog, a searchable project
//! selector, a reason capture modal and a footer. A gallery binary hosts all of
//! them.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`constants`] - Fixed UI text, quotes and layout values
//! * [`icons`] - Themed icon sets
//! * [`logger`] - Logging setup and the in-memory log ring
//! * [`ui`] - Components, the component core and the gallery application
//! * [`utils`] - Color and date helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for colors and dates
pub mod utils;
