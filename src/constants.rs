//! Constants used throughout the application
//!
//! This module centralizes UI text, the quote list and other constant values
//! to improve maintainability and consistency.

/// A quote shown by the image banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

/// Quotes cycled by the image banner, in display order
pub const QUOTES: [Quote; 3] = [
    Quote {
        text: "Great things in business are never done by one person. They're done by a team of people.",
        author: "Steve Jobs",
    },
    Quote {
        text: "Alone we can do so little; together we can do so much.",
        author: "Helen Keller",
    },
    Quote {
        text: "Coming together is a beginning, staying together is progress, and working together is success.",
        author: "Henry Ford",
    },
];

/// Milliseconds between quote rotations
pub const QUOTE_INTERVAL_MS: u64 = 5000;

/// Upper bound accepted for a configured quote interval (one hour)
pub const QUOTE_INTERVAL_MAX_MS: u64 = 3_600_000;

// Logo drawn over the banner backdrop
pub const LOGO_LINES: [&str; 3] = [
    "╔═╗╔╦╗  ┌─┐┬  ┬┬┌┬┐┌─┐",
    "╠═╝║║║  └─┐│  │ ││ ├┤ ",
    "╩  ╩ ╩  └─┘┴─┘┴─┴┘ └─┘",
];

/// Character used to paint the banner backdrop
pub const BACKDROP_GLYPH: &str = "░";

// Footer
pub const FOOTER_DEFAULT_BRAND: &str = "Project Management Team";
pub const FOOTER_RIGHTS: &str = "All rights reserved.";

// Dialog titles
pub const TITLE_NOTIFICATION: &str = "Notification";
pub const TITLE_WARNING: &str = "Warning";
pub const TITLE_ERROR: &str = "Error";
pub const TITLE_CONFIRMATION: &str = "Confirmation";
pub const TITLE_REASON: &str = "Enter Reason";

// Button labels
pub const LABEL_CONFIRM: &str = "Confirm";
pub const LABEL_CANCEL: &str = "Cancel";
pub const LABEL_SUBMIT: &str = "Submit";

// Selector text
pub const PROJECT_PLACEHOLDER: &str = "Select Project";
pub const PROJECT_LOADING: &str = "Loading...";
pub const PROJECT_NO_OPTIONS: &str = "No options";
pub const ASSIGNEE_PLACEHOLDER: &str = "Select Assignee";
pub const REASON_FIELD_TITLE: &str = "Reason";

/// Base utility classes every button starts from
pub const BUTTON_BASE_CLASSES: &str = "bg-blue-600 text-white font-bold px-2 rounded focus:bg-blue-800";

/// Classes for the reason modal's cancel button
pub const BUTTON_CANCEL_CLASSES: &str = "bg-gray-500 focus:bg-gray-700";

/// Classes for the notification dialog's confirm button on error dialogs
pub const BUTTON_DANGER_CLASSES: &str = "bg-red-600 focus:bg-red-800";

pub const BUTTON_WARNING_CLASSES: &str = "bg-yellow-600 text-black focus:bg-yellow-800";
pub const BUTTON_SUCCESS_CLASSES: &str = "bg-green-600 focus:bg-green-800";
pub const BUTTON_MUTED_CLASSES: &str = "bg-gray-500 focus:bg-gray-700 italic";

// Assignee layout buckets, in pixels
pub const ASSIGNEE_FONT_DEFAULT_PX: u16 = 14;
pub const ASSIGNEE_FONT_COMPACT_PX: u16 = 12;
pub const ASSIGNEE_WIDTH_NARROW_PX: u16 = 300;
pub const ASSIGNEE_WIDTH_WIDE_PX: u16 = 560;
pub const ASSIGNEE_MARGIN_WIDE_PX: u16 = 16;
pub const ASSIGNEE_HEIGHT_SINGLE_PX: u16 = 40;

// Terminal cell metrics used to convert pixel lengths
/// Pixels per terminal column
pub const PX_PER_COLUMN: u16 = 8;
/// Pixels per terminal row
pub const PX_PER_ROW: u16 = 16;

// In-memory log ring
pub const LOG_RING_CAPACITY: usize = 500;
pub const LOG_FILE_NAME: &str = "pm-widgets.log";
pub const APP_DIR_NAME: &str = "pm-widgets";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

/// Demo fixtures loaded by the gallery
pub const DEMO_DATA: &str = r#"{
    "projects": [
        { "id": "p-100", "name": "Website Redesign" },
        { "id": "p-200", "name": "Mobile App" },
        { "id": "p-300", "name": "Data Migration" },
        { "id": "p-400", "name": "Quarterly Planning" }
    ],
    "assignees": [
        { "value": "u-1", "label": "Alice Martin" },
        { "value": "u-2", "label": "Bruno Costa" },
        { "value": "u-3", "label": "Chen Wei" },
        { "value": "u-4", "label": "Dana Okafor" },
        { "value": "u-5", "label": "Elif Yilmaz" }
    ],
    "routes": ["Home", "Projects", "Tasks", "Reports", "Settings"]
}"#;
