//! Themed glyphs.
//!
//! Terminals differ in what they can draw, so every glyph a component shows
//! comes from an [`IconService`] holding one of three themes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    Emoji,
    /// Single-width symbols most fonts carry
    #[default]
    Unicode,
    /// Plain ASCII for minimal terminals
    Ascii,
}

impl IconTheme {
    /// Ascii -> Unicode -> Emoji -> Ascii
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Ascii => Self::Unicode,
            Self::Unicode => Self::Emoji,
            Self::Emoji => Self::Ascii,
        }
    }
}

/// Icons heading each dialog kind
#[derive(Debug, Clone, Copy)]
pub struct DialogIcons {
    pub notification: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub confirmation: &'static str,
}

/// Glyphs drawn by interactive controls
#[derive(Debug, Clone, Copy)]
pub struct ControlIcons {
    pub dropdown: &'static str,
    pub dropdown_open: &'static str,
    pub checked: &'static str,
    pub unchecked: &'static str,
    pub remove: &'static str,
    pub search: &'static str,
    pub loading: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    pub dialog: DialogIcons,
    pub controls: ControlIcons,
}

const EMOJI: IconSet = IconSet {
    dialog: DialogIcons {
        notification: "🔔",
        warning: "⚠️",
        error: "❌",
        confirmation: "❓",
    },
    controls: ControlIcons {
        dropdown: "🔽",
        dropdown_open: "🔼",
        checked: "✅",
        unchecked: "⬜",
        remove: "✖️",
        search: "🔍",
        loading: "⏳",
    },
};

const UNICODE: IconSet = IconSet {
    dialog: DialogIcons {
        notification: "ⓘ",
        warning: "⚠",
        error: "✗",
        confirmation: "?",
    },
    controls: ControlIcons {
        dropdown: "▾",
        dropdown_open: "▴",
        checked: "☑",
        unchecked: "☐",
        remove: "×",
        search: "⌕",
        loading: "⟳",
    },
};

const ASCII: IconSet = IconSet {
    dialog: DialogIcons {
        notification: "i",
        warning: "!",
        error: "X",
        confirmation: "?",
    },
    controls: ControlIcons {
        dropdown: "v",
        dropdown_open: "^",
        checked: "[x]",
        unchecked: "[ ]",
        remove: "x",
        search: "/",
        loading: "...",
    },
};

/// Hands out glyphs for the active theme
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = self.current_theme.next();
    }

    #[must_use]
    pub fn icons(&self) -> &'static IconSet {
        match self.current_theme {
            IconTheme::Emoji => &EMOJI,
            IconTheme::Unicode => &UNICODE,
            IconTheme::Ascii => &ASCII,
        }
    }

    #[must_use]
    pub fn notification(&self) -> &'static str {
        self.icons().dialog.notification
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().dialog.warning
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().dialog.error
    }

    #[must_use]
    pub fn confirmation(&self) -> &'static str {
        self.icons().dialog.confirmation
    }

    /// Dropdown indicator, flipped while the menu is open
    #[must_use]
    pub fn dropdown(&self, open: bool) -> &'static str {
        let controls = &self.icons().controls;
        if open {
            controls.dropdown_open
        } else {
            controls.dropdown
        }
    }

    #[must_use]
    pub fn checkbox(&self, checked: bool) -> &'static str {
        let controls = &self.icons().controls;
        if checked {
            controls.checked
        } else {
            controls.unchecked
        }
    }

    #[must_use]
    pub fn remove(&self) -> &'static str {
        self.icons().controls.remove
    }

    #[must_use]
    pub fn search(&self) -> &'static str {
        self.icons().controls.search
    }

    #[must_use]
    pub fn loading(&self) -> &'static str {
        self.icons().controls.loading
    }
}
