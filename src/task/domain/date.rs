//! Canonical calendar dates for task scheduling.

use super::ParseDueDateError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of ASCII digits in the canonical `YYYYMMDD` form.
const CANONICAL_LEN: usize = 8;

/// Largest year the canonical form can represent.
const MAX_CANONICAL_YEAR: i32 = 9999;

/// A task due date: a naive calendar date with a fixed-width `YYYYMMDD`
/// text form.
///
/// Because the text form is zero-padded and fixed-width, lexical order of the
/// canonical strings matches chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Parses a canonical `YYYYMMDD` date.
    ///
    /// # Errors
    ///
    /// Returns [`ParseDueDateError`] when the text is not exactly eight ASCII
    /// digits or does not name a real calendar day.
    pub fn parse(text: &str) -> Result<Self, ParseDueDateError> {
        let malformed = || ParseDueDateError(text.to_owned());
        if text.len() != CANONICAL_LEN || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let raw_year = digits(text, 0, 4).ok_or_else(malformed)?;
        let month = digits(text, 4, 6).ok_or_else(malformed)?;
        let day = digits(text, 6, 8).ok_or_else(malformed)?;
        let year = i32::try_from(raw_year).map_err(|_| malformed())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(malformed)
    }

    /// Wraps a calendar date, returning `None` when its year falls outside
    /// the four-digit canonical range.
    #[must_use]
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        (0..=MAX_CANONICAL_YEAR)
            .contains(&date.year())
            .then_some(Self(date))
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Returns the canonical `YYYYMMDD` text.
    #[must_use]
    pub fn canonical(self) -> String {
        self.to_string()
    }
}

fn digits(text: &str, start: usize, end: usize) -> Option<u32> {
    text.get(start..end)?.parse().ok()
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DueDate {
    type Err = ParseDueDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DueDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DueDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
