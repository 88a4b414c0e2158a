//! Domain primitives: TimeMs and the UTC calendar bucket keys.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of hour slots in a day view.
pub const HOURS_PER_DAY: usize = 24;

/// Years whose keys render as four zero-padded digits.
pub const KEY_YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Whether `dt` yields fixed-width `YYYY-MM` / `YYYY-MM-DD` keys.
pub fn has_fixed_width_keys(dt: &DateTime<Utc>) -> bool {
    KEY_YEAR_RANGE.contains(&dt.year())
}

/// Time in milliseconds since Unix epoch.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeMs(pub i64);

impl TimeMs {
    /// Create a TimeMs from milliseconds.
    pub fn new(ms: i64) -> Self {
        TimeMs(ms)
    }

    /// Get the underlying milliseconds value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        TimeMs(dt.timestamp_millis())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("invalid month key {0:?}, expected YYYY-MM")]
    Month(String),
    #[error("invalid day key {0:?}, expected YYYY-MM-DD")]
    Day(String),
    #[error("invalid hour {0}, expected 0-23")]
    Hour(u32),
}

/// UTC calendar month, `"YYYY-MM"`.
///
/// Keys are zero-padded and fixed-width, so lexicographic order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthKey(String);

impl MonthKey {
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        MonthKey(dt.format("%Y-%m").to_string())
    }

    /// Parse and validate a `"YYYY-MM"` key.
    pub fn parse(s: &str) -> Result<Self, KeyParseError> {
        let valid = s.len() == 7
            && NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").is_ok();
        if valid {
            Ok(MonthKey(s.to_string()))
        } else {
            Err(KeyParseError::Month(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display label, e.g. `"Sep 2025"`.
    pub fn label(&self) -> String {
        NaiveDate::parse_from_str(&format!("{}-01", self.0), "%Y-%m-%d")
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|_| self.0.clone())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// UTC calendar date, `"YYYY-MM-DD"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(String);

impl DayKey {
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        DayKey(dt.format("%Y-%m-%d").to_string())
    }

    /// Parse and validate a `"YYYY-MM-DD"` key.
    pub fn parse(s: &str) -> Result<Self, KeyParseError> {
        let valid = s.len() == 10 && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok();
        if valid {
            Ok(DayKey(s.to_string()))
        } else {
            Err(KeyParseError::Day(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The month this day belongs to (the `"YYYY-MM"` prefix).
    pub fn month(&self) -> MonthKey {
        MonthKey(self.0.chars().take(7).collect())
    }

    /// Display label, e.g. `"29 Sep 2025"`.
    pub fn label(&self) -> String {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d")
            .map(|d| d.format("%-d %b %Y").to_string())
            .unwrap_or_else(|_| self.0.clone())
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// UTC hour of day in `[0, 23]`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Hour(u8);

impl Hour {
    pub fn new(hour: u32) -> Result<Self, KeyParseError> {
        if (hour as usize) < HOURS_PER_DAY {
            Ok(Hour(hour as u8))
        } else {
            Err(KeyParseError::Hour(hour))
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// `"HH:00"`.
    pub fn label(&self) -> String {
        format!("{:02}:00", self.0)
    }
}
