//! Normalization applied to every task draft on create and update.

use super::{DueDate, RecurrenceError, TaskDetails, TaskDomainError, TaskDraft, next_occurrence};
use chrono::NaiveDate;

/// Validates a draft and normalizes its due date against `today`.
///
/// A blank date becomes today. A past-due one-off task is resurfaced as due
/// today; a past-due recurring task is rolled forward with
/// [`next_occurrence`]. The rule is only checked when that rollforward runs,
/// so an invalid rule on a present or future date is accepted as-is.
///
/// # Errors
///
/// Returns [`TaskDomainError::EmptyTitle`] for a blank title,
/// [`TaskDomainError::BadDate`] for a malformed date, and
/// [`TaskDomainError::Recurrence`] when the rollforward fails or `today`
/// itself has no four-digit year.
pub fn validate_and_normalize(
    draft: TaskDraft,
    today: NaiveDate,
) -> Result<TaskDetails, TaskDomainError> {
    let TaskDraft {
        date,
        title,
        comment,
        repeat,
    } = draft;

    if title.trim().is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }

    let today_date = DueDate::from_naive(today).ok_or(RecurrenceError::DateOutOfRange)?;
    let today_text = today_date.canonical();
    let date_text = if date.is_empty() { today_text.clone() } else { date };

    let parsed = DueDate::parse(&date_text).map_err(|err| TaskDomainError::BadDate(err.0))?;

    let due = if date_text < today_text {
        if repeat.is_empty() {
            today_date
        } else {
            next_occurrence(today, &date_text, &repeat)?
        }
    } else {
        parsed
    };

    Ok(TaskDetails::from_parts(due, title, comment, repeat))
}
