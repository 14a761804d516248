//! Domain model for task scheduling.
//!
//! The task domain models canonical due dates, recurrence rules, the
//! next-occurrence engine, and draft validation while keeping all
//! infrastructure concerns outside of the domain boundary.

mod date;
mod error;
mod ids;
mod recurrence;
mod task;
mod validation;

pub use date::DueDate;
pub use error::{ParseDueDateError, RecurrenceError, TaskDomainError};
pub use ids::TaskId;
pub use recurrence::{MAX_INTERVAL_DAYS, RecurrenceRule, next_occurrence};
pub use task::{Task, TaskDetails, TaskDraft};
pub use validation::validate_and_normalize;
