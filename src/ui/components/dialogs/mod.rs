//! Shared pieces for modal dialogs

pub mod common;
