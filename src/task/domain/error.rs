//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while validating and normalizing a task draft.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The due date is not a `YYYYMMDD` calendar date.
    #[error("invalid due date '{0}', expected YYYYMMDD")]
    BadDate(String),

    /// Rolling a past-due recurring task forward failed.
    #[error(transparent)]
    Recurrence(#[from] RecurrenceError),
}

/// Errors returned by the recurrence engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecurrenceError {
    /// The rule does not match `y` or `d<N>` with N in 1..=400.
    #[error("invalid recurrence rule '{0}'")]
    InvalidRule(String),

    /// The reference date is not a `YYYYMMDD` calendar date.
    #[error("invalid reference date '{0}', expected YYYYMMDD")]
    DateParse(String),

    /// The next occurrence falls outside the four-digit year range.
    #[error("next occurrence is outside the representable date range")]
    DateOutOfRange,
}

/// Error returned while parsing a canonical due date.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid due date '{0}', expected YYYYMMDD")]
pub struct ParseDueDateError(pub String);
