//! Sampling frequency parsed from pandas-style offset strings.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;

use crate::error::CalendarError;

/// A sampling interval parsed from an offset string such as `"1D"` or `"10T"`.
///
/// Recognised unit codes (case-insensitive):
///
/// | Code | Unit |
/// |------|------|
/// | `D`, `day(s)` | day |
/// | `H`, `hour(s)` | hour |
/// | `T`, `min`, `minute(s)` | minute |
/// | `S`, `sec`, `second(s)` | second |
///
/// The numeric multiple defaults to 1 when omitted (`"D"` equals `"1D"`),
/// and whitespace between multiple and unit is allowed (`"1 day"`).
/// The original specifier string is retained for display and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequency {
    step: TimeDelta,
    spec: String,
}

impl Frequency {
    /// Parses an offset string into a `Frequency`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidFrequency`] when the string is empty,
    /// the unit code is unknown, or the multiple is zero.
    pub fn parse(spec: &str) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidFrequency {
            spec: spec.to_string(),
        };

        let trimmed = spec.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let (digits, unit) = trimmed.split_at(split);

        let multiple: i64 = if digits.is_empty() {
            1
        } else {
            digits.parse().map_err(|_| invalid())?
        };
        if multiple == 0 {
            return Err(invalid());
        }

        let step = match unit.trim().to_ascii_lowercase().as_str() {
            "d" | "day" | "days" => TimeDelta::days(multiple),
            "h" | "hour" | "hours" => TimeDelta::hours(multiple),
            "t" | "min" | "minute" | "minutes" => TimeDelta::minutes(multiple),
            "s" | "sec" | "second" | "seconds" => TimeDelta::seconds(multiple),
            _ => return Err(invalid()),
        };

        Ok(Self {
            step,
            spec: trimmed.to_string(),
        })
    }

    /// Returns the sampling step.
    pub fn step(&self) -> TimeDelta {
        self.step
    }

    /// Returns the original offset string.
    pub fn as_str(&self) -> &str {
        &self.spec
    }
}

impl FromStr for Frequency {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}
