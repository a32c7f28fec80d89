use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{ReportError, Result};

pub const MIN_YEAR: u16 = 1900;
pub const MAX_YEAR: u16 = 2100;

/// A four-digit year between 1900 and 2100.
///
/// Years are keys, not numbers: they are stored, compared and looked up as
/// the literal string, so `"2020"` never matches `"20"` or `"02020"`. Since
/// every valid year has exactly four digits, string order is also
/// chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Year(String);

impl Year {
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || ReportError::InvalidArgument(format!("{input:?} is not a valid year"));

        if input.len() != 4 || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u16 = input.parse().map_err(|_| invalid())?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(invalid());
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Year {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Year {
    type Error = ReportError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
