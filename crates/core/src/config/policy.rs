use serde::Serialize;
use std::{fmt, str::FromStr};

use crate::{error::Error, impl_case_insensitive_deserialize};

/// How results outside the `i64` range are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Report `Error::Overflow`
    #[default]
    Checked,
    /// Two's-complement wraparound
    Wrapping,
    /// Clamp to `i64::MIN` / `i64::MAX`
    Saturating,
}

impl_case_insensitive_deserialize!(
    OverflowPolicy,
    Checked => "checked",
    Wrapping => "wrapping",
    Saturating => "saturating",
);

impl OverflowPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            OverflowPolicy::Checked => "checked",
            OverflowPolicy::Wrapping => "wrapping",
            OverflowPolicy::Saturating => "saturating",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "checked" => Ok(OverflowPolicy::Checked),
            "wrapping" => Ok(OverflowPolicy::Wrapping),
            "saturating" => Ok(OverflowPolicy::Saturating),
            _ => Err(Error::ConfigError(format!(
                "unknown overflow policy '{s}', expected one of: checked, wrapping, saturating"
            ))),
        }
    }
}
