//! Date and time utility functions

use chrono::{Datelike, Local};

/// Current calendar year in the local timezone
#[must_use]
pub fn current_year() -> i32 {
    Local::now().year()
}

