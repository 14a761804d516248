//! Task aggregate and the client-supplied draft it is validated from.

use super::{DueDate, TaskId};
use serde::{Deserialize, Serialize};

/// Client-supplied task fields before validation.
///
/// Every field is raw text: an empty `date` means "today" and an empty
/// `repeat` means a one-off task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Due date in `YYYYMMDD` form, or empty.
    #[serde(default)]
    pub date: String,
    /// Task title; must not be blank.
    #[serde(default)]
    pub title: String,
    /// Free-text comment.
    #[serde(default)]
    pub comment: String,
    /// Recurrence rule text, or empty.
    #[serde(default)]
    pub repeat: String,
}

impl TaskDraft {
    /// Creates a draft with a title and no other fields.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the due date text.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Sets the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Sets the recurrence rule text.
    #[must_use]
    pub fn with_repeat(mut self, repeat: impl Into<String>) -> Self {
        self.repeat = repeat.into();
        self
    }
}

/// Validated task fields, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetails {
    date: DueDate,
    title: String,
    comment: String,
    repeat: String,
}

impl TaskDetails {
    /// Assembles details from already-validated parts.
    ///
    /// Adapters use this when reconstructing stored rows; client input goes
    /// through [`super::validate_and_normalize`] instead.
    #[must_use]
    pub fn from_parts(
        date: DueDate,
        title: impl Into<String>,
        comment: impl Into<String>,
        repeat: impl Into<String>,
    ) -> Self {
        Self {
            date,
            title: title.into(),
            comment: comment.into(),
            repeat: repeat.into(),
        }
    }

    /// Returns the due date.
    #[must_use]
    pub const fn date(&self) -> DueDate {
        self.date
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the comment.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the recurrence rule text.
    #[must_use]
    pub fn repeat(&self) -> &str {
        &self.repeat
    }

    /// Returns `true` when the task has no recurrence rule.
    #[must_use]
    pub fn is_one_off(&self) -> bool {
        self.repeat.is_empty()
    }
}

/// Persisted task: validated details plus the storage-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(flatten)]
    details: TaskDetails,
}

impl Task {
    /// Binds validated details to an identifier.
    #[must_use]
    pub const fn new(id: TaskId, details: TaskDetails) -> Self {
        Self { id, details }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the validated details.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the due date.
    #[must_use]
    pub const fn date(&self) -> DueDate {
        self.details.date
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.details.title()
    }

    /// Returns the comment.
    #[must_use]
    pub fn comment(&self) -> &str {
        self.details.comment()
    }

    /// Returns the recurrence rule text.
    #[must_use]
    pub fn repeat(&self) -> &str {
        self.details.repeat()
    }

    /// Returns `true` when the task has no recurrence rule.
    #[must_use]
    pub fn is_one_off(&self) -> bool {
        self.details.is_one_off()
    }

    /// Moves the task to a new due date.
    pub const fn reschedule(&mut self, date: DueDate) {
        self.details.date = date;
    }
}
