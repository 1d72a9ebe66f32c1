use serde::{Deserialize, Serialize};

/// An entry offered by the select widgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Options with an empty value are placeholders, never real choices
    pub fn has_empty_value(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_selectable(&self) -> bool {
        !self.disabled && !self.has_empty_value()
    }
}
