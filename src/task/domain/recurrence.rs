//! Recurrence rules and next-occurrence computation.
//!
//! A rule is either `y` (every year) or `d<N>` (every N days, N in 1..=400).
//! The digits may follow the `d` directly or after a single space, so `d7`
//! and `d 7` name the same rule.
//!
//! Annual steps are anchored to the starting date: the k-th occurrence is
//! the starting date plus k years. When the starting date is February 29 and
//! the target year is not a leap year, the occurrence falls on March 1; the
//! next leap year lands on February 29 again.

use super::{DueDate, RecurrenceError};
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Largest accepted day interval for `d<N>` rules.
pub const MAX_INTERVAL_DAYS: u16 = 400;

/// A parsed recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceRule {
    /// Repeat every N days.
    EveryDays(u16),
    /// Repeat on the same month and day every year.
    Yearly,
}

impl RecurrenceRule {
    /// Parses a rule from its text form.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::InvalidRule`] when the text is empty, uses
    /// an unknown prefix, has no digits after `d`, or names an interval
    /// outside 1..=400.
    pub fn parse(rule: &str) -> Result<Self, RecurrenceError> {
        let invalid = || RecurrenceError::InvalidRule(rule.to_owned());
        if rule == "y" {
            return Ok(Self::Yearly);
        }

        let Some(rest) = rule.strip_prefix('d') else {
            return Err(invalid());
        };
        let digits = rest.strip_prefix(' ').unwrap_or(rest);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let value: u64 = digits.parse().map_err(|_| invalid())?;
        let days = u16::try_from(value).map_err(|_| invalid())?;
        if !(1..=MAX_INTERVAL_DAYS).contains(&days) {
            return Err(invalid());
        }
        Ok(Self::EveryDays(days))
    }

    /// Returns the `step`-th occurrence after `start`, or `None` when it
    /// cannot be represented.
    fn nth_occurrence(self, start: NaiveDate, step: u32) -> Option<NaiveDate> {
        match self {
            Self::EveryDays(days) => {
                start.checked_add_days(Days::new(u64::from(days) * u64::from(step)))
            }
            Self::Yearly => add_years(start, i32::try_from(step).ok()?),
        }
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EveryDays(days) => write!(f, "d{days}"),
            Self::Yearly => f.write_str("y"),
        }
    }
}

impl FromStr for RecurrenceRule {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Adds whole years, rolling February 29 to March 1 in non-leap years.
fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let year = date.year().checked_add(years)?;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Computes the next occurrence of `rule` starting from the canonical date
/// `from`.
///
/// The date is rolled forward while it is on or before `now`, or while its
/// canonical text does not sort after `from`. Canonical text sorts in date
/// order, so the second check compares dates directly. Both conditions are
/// checked on every step, so a future-dated `from` still advances at least
/// once.
///
/// Rule errors are reported before date errors.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidRule`] for a malformed rule,
/// [`RecurrenceError::DateParse`] when `from` is not `YYYYMMDD`, and
/// [`RecurrenceError::DateOutOfRange`] when the result would leave the
/// four-digit year range.
pub fn next_occurrence(
    now: NaiveDate,
    from: &str,
    rule: &str,
) -> Result<DueDate, RecurrenceError> {
    let parsed_rule = RecurrenceRule::parse(rule)?;
    let start =
        DueDate::parse(from).map_err(|_| RecurrenceError::DateParse(from.to_owned()))?;

    let mut step: u32 = 0;
    let mut candidate = start;
    while candidate.as_naive() <= now || candidate <= start {
        step = step.checked_add(1).ok_or(RecurrenceError::DateOutOfRange)?;
        candidate = parsed_rule
            .nth_occurrence(start.as_naive(), step)
            .and_then(DueDate::from_naive)
            .ok_or(RecurrenceError::DateOutOfRange)?;
    }
    Ok(candidate)
}
