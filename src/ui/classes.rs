//! Utility-class styling.
//!
//! Components describe their look with space separated utility classes
//! (`bg-blue-600 text-white font-bold px-2 rounded`). A [`ClassList`] parses
//! such a string and resolves it into a [`ResolvedClasses`]: a Ratatui style,
//! a focus style, padding and border flags. Later classes override earlier
//! ones, so caller-supplied classes appended to a base list win.
//!
//! Supported utilities:
//!
//! | class | effect |
//! |---|---|
//! | `bg-{color}[-{shade}]` | background color |
//! | `text-{color}[-{shade}]` | foreground color |
//! | `font-bold`, `font-normal` | bold on / off |
//! | `italic`, `underline`, `uppercase` | text modifiers |
//! | `opacity-{n}` | dimmed when `n < 100` |
//! | `p-{n}`, `px-{n}`, `py-{n}` | padding in cells |
//! | `border`, `rounded` | bordered / rounded border |
//! | `focus:{class}`, `hover:{class}` | applied while focused |

use crate::utils::color::palette_color;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{BorderType, Padding};

/// Errors produced while parsing a single utility class or length
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("unknown utility class '{0}'")]
    UnknownClass(String),

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("invalid length '{0}'")]
    InvalidLength(String),
}

/// A single parsed utility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utility {
    Background(Color),
    Foreground(Color),
    Bold(bool),
    Italic,
    Underline,
    Uppercase,
    Dim,
    Opaque,
    Padding(u16),
    PaddingX(u16),
    PaddingY(u16),
    Border,
    Rounded,
}

/// A utility with its state variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Class {
    pub utility: Utility,
    pub on_focus: bool,
}

/// Parse one class token such as `focus:bg-blue-800`
pub fn parse_class(token: &str) -> Result<Class, StyleError> {
    let (on_focus, name) = match token.split_once(':') {
        Some(("focus" | "hover", rest)) => (true, rest),
        Some(_) => return Err(StyleError::UnknownClass(token.to_string())),
        None => (false, token),
    };

    let utility = match name {
        "font-bold" => Utility::Bold(true),
        "font-normal" => Utility::Bold(false),
        "italic" => Utility::Italic,
        "underline" => Utility::Underline,
        "uppercase" => Utility::Uppercase,
        "border" => Utility::Border,
        "rounded" => Utility::Rounded,
        _ => {
            if let Some(color) = name.strip_prefix("bg-") {
                Utility::Background(parse_color(color)?)
            } else if let Some(color) = name.strip_prefix("text-") {
                Utility::Foreground(parse_color(color)?)
            } else if let Some(value) = name.strip_prefix("opacity-") {
                let opacity: u16 = value.parse().map_err(|_| StyleError::InvalidLength(name.to_string()))?;
                if opacity >= 100 {
                    Utility::Opaque
                } else {
                    Utility::Dim
                }
            } else if let Some(value) = name.strip_prefix("px-") {
                Utility::PaddingX(parse_cells(value)?)
            } else if let Some(value) = name.strip_prefix("py-") {
                Utility::PaddingY(parse_cells(value)?)
            } else if let Some(value) = name.strip_prefix("p-") {
                Utility::Padding(parse_cells(value)?)
            } else {
                return Err(StyleError::UnknownClass(token.to_string()));
            }
        }
    };

    Ok(Class { utility, on_focus })
}

fn parse_cells(value: &str) -> Result<u16, StyleError> {
    value.parse::<u16>().map_err(|_| StyleError::InvalidLength(value.to_string()))
}

fn parse_color(value: &str) -> Result<Color, StyleError> {
    let (name, shade) = match value.rsplit_once('-') {
        Some((name, shade)) => match shade.parse::<u16>() {
            Ok(shade) => (name, Some(shade)),
            Err(_) => return Err(StyleError::UnknownColor(value.to_string())),
        },
        None => (value, None),
    };
    palette_color(name, shade).ok_or_else(|| StyleError::UnknownColor(value.to_string()))
}

/// Style, padding and border flags resolved from a class list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedClasses {
    pub base: Style,
    pub focus: Style,
    pub padding: Padding,
    pub bordered: bool,
    pub rounded: bool,
    pub uppercase: bool,
}

impl Default for ResolvedClasses {
    fn default() -> Self {
        Self {
            base: Style::default(),
            focus: Style::default(),
            padding: Padding::ZERO,
            bordered: false,
            rounded: false,
            uppercase: false,
        }
    }
}

impl ResolvedClasses {
    /// Effective style for the given focus state
    #[must_use]
    pub fn style(&self, focused: bool) -> Style {
        if focused {
            self.base.patch(self.focus)
        } else {
            self.base
        }
    }

    #[must_use]
    pub fn border_type(&self) -> BorderType {
        if self.rounded {
            BorderType::Rounded
        } else {
            BorderType::Plain
        }
    }
}

/// An ordered list of utility classes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<Class>,
}

impl ClassList {
    /// Parse a class string, skipping tokens that do not parse
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let classes = input
            .split_whitespace()
            .filter_map(|token| match parse_class(token) {
                Ok(class) => Some(class),
                Err(e) => {
                    log::debug!("Ignoring class: {}", e);
                    None
                }
            })
            .collect();
        Self { classes }
    }

    /// Parse a class string, failing on the first invalid token
    pub fn parse_strict(input: &str) -> Result<Self, StyleError> {
        let classes = input.split_whitespace().map(parse_class).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { classes })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    #[must_use]
    pub fn resolve(&self) -> ResolvedClasses {
        let mut resolved = ResolvedClasses::default();

        for class in &self.classes {
            let target = if class.on_focus {
                &mut resolved.focus
            } else {
                &mut resolved.base
            };

            match class.utility {
                Utility::Background(color) => *target = target.bg(color),
                Utility::Foreground(color) => *target = target.fg(color),
                Utility::Bold(true) => *target = target.add_modifier(Modifier::BOLD),
                Utility::Bold(false) => *target = target.remove_modifier(Modifier::BOLD),
                Utility::Italic => *target = target.add_modifier(Modifier::ITALIC),
                Utility::Underline => *target = target.add_modifier(Modifier::UNDERLINED),
                Utility::Dim => *target = target.add_modifier(Modifier::DIM),
                Utility::Opaque => *target = target.remove_modifier(Modifier::DIM),
                Utility::Uppercase => resolved.uppercase = true,
                Utility::Border => resolved.bordered = true,
                Utility::Rounded => {
                    resolved.bordered = true;
                    resolved.rounded = true;
                }
                Utility::Padding(cells) => resolved.padding = Padding::uniform(cells),
                Utility::PaddingX(cells) => {
                    resolved.padding.left = cells;
                    resolved.padding.right = cells;
                }
                Utility::PaddingY(cells) => {
                    resolved.padding.top = cells;
                    resolved.padding.bottom = cells;
                }
            }
        }

        resolved
    }
}

/// Join a base class string with caller-supplied extra classes
#[must_use]
pub fn join_classes(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}
