use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported decimal separator '{0}', expected 'comma' or 'point'")]
pub struct ParseDecimalSeparatorError(String);

/// Character shown between the integer and fractional part of an amount.
///
/// Parsing always maps the separator back to `.` before reading a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalSeparator {
    #[default]
    Comma,
    Point,
}

impl DecimalSeparator {
    pub fn as_char(&self) -> char {
        match self {
            Self::Comma => ',',
            Self::Point => '.',
        }
    }
}

impl fmt::Display for DecimalSeparator {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Comma => f.write_str("comma"),
            Self::Point => f.write_str("point"),
        }
    }
}

impl FromStr for DecimalSeparator {
    type Err = ParseDecimalSeparatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "comma" | "," => Ok(Self::Comma),
            "point" | "dot" | "." => Ok(Self::Point),
            _ => Err(ParseDecimalSeparatorError(s.to_string())),
        }
    }
}
