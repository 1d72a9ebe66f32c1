//! CSS-style lengths and their conversion to terminal cells

use crate::constants::{PX_PER_COLUMN, PX_PER_ROW};
use crate::ui::classes::StyleError;
use std::fmt;
use std::str::FromStr;

/// A length expressed the way style props are written (`"300px"`, `"auto"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssLength {
    Px(u16),
    Auto,
}

impl CssLength {
    /// Columns needed to cover this length, `None` for `auto`
    #[must_use]
    pub fn to_columns(self) -> Option<u16> {
        match self {
            Self::Px(px) => Some(px.div_ceil(PX_PER_COLUMN)),
            Self::Auto => None,
        }
    }

    /// Rows needed to cover this length, `None` for `auto`
    #[must_use]
    pub fn to_rows(self) -> Option<u16> {
        match self {
            Self::Px(px) => Some(px.div_ceil(PX_PER_ROW)),
            Self::Auto => None,
        }
    }
}

impl FromStr for CssLength {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "auto" {
            return Ok(Self::Auto);
        }
        s.strip_suffix("px")
            .and_then(|value| value.parse::<u16>().ok())
            .map(Self::Px)
            .ok_or_else(|| StyleError::InvalidLength(s.to_string()))
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{}px", px),
            Self::Auto => f.write_str("auto"),
        }
    }
}
