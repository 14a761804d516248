//! Service layer for task creation, lookup, editing, and completion.

use super::SchedulerConfig;
use crate::task::{
    domain::{
        DueDate, RecurrenceError, Task, TaskDomainError, TaskDraft, TaskId, next_occurrence,
        validate_and_normalize,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Draft validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Computing the next occurrence failed.
    #[error(transparent)]
    Recurrence(#[from] RecurrenceError),
    /// No task has the identifier, or it disappeared before the write.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Coarse classification of [`TaskLifecycleError`] for client-facing
/// mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskErrorKind {
    /// The title is blank.
    EmptyTitle,
    /// A date is not `YYYYMMDD`.
    BadDate,
    /// A recurrence rule is malformed or out of range.
    InvalidRule,
    /// The task does not exist.
    TaskNotFound,
    /// Storage reported a failure.
    StorageError,
}

impl TaskLifecycleError {
    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> TaskErrorKind {
        match self {
            Self::Domain(TaskDomainError::EmptyTitle) => TaskErrorKind::EmptyTitle,
            Self::Domain(TaskDomainError::BadDate(_)) => TaskErrorKind::BadDate,
            Self::Domain(TaskDomainError::Recurrence(err)) | Self::Recurrence(err) => {
                recurrence_kind(err)
            }
            Self::NotFound(_) => TaskErrorKind::TaskNotFound,
            Self::Repository(_) => TaskErrorKind::StorageError,
        }
    }
}

const fn recurrence_kind(err: &RecurrenceError) -> TaskErrorKind {
    match err {
        RecurrenceError::InvalidRule(_) | RecurrenceError::DateOutOfRange => {
            TaskErrorKind::InvalidRule
        }
        RecurrenceError::DateParse(_) => TaskErrorKind::BadDate,
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Maps a repository "zero rows" outcome to [`TaskLifecycleError::NotFound`].
fn not_found_or_repository(err: TaskRepositoryError) -> TaskLifecycleError {
    match err {
        TaskRepositoryError::NotFound(id) => TaskLifecycleError::NotFound(id),
        other @ TaskRepositoryError::Persistence(_) => TaskLifecycleError::Repository(other),
    }
}

/// Task scheduling orchestration service.
///
/// "Today" is the UTC calendar date reported by the injected clock.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: SchedulerConfig,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new service with the default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, SchedulerConfig::default())
    }

    /// Creates a new service with an explicit configuration.
    #[must_use]
    pub const fn with_config(repository: Arc<R>, clock: Arc<C>, config: SchedulerConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }

    /// Validates a draft and stores it as a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when validation fails or
    /// [`TaskLifecycleError::Repository`] when the store fails.
    pub async fn create(&self, draft: TaskDraft) -> TaskLifecycleResult<Task> {
        let details = validate_and_normalize(draft, self.today())?;
        let id = self.repository.create(&details).await?;
        info!(task_id = %id, due_date = %details.date(), "task created");
        Ok(Task::new(id, details))
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// or [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn get(&self, id: &TaskId) -> TaskLifecycleResult<Task> {
        debug!(task_id = %id, "looking up task");
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskLifecycleError::NotFound(id.clone()))
    }

    /// Lists upcoming tasks ordered by due date, capped at the configured
    /// limit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.repository.list(self.config.list_limit).await?;
        debug!(count = tasks.len(), limit = self.config.list_limit, "listed tasks");
        Ok(tasks)
    }

    /// Validates a draft and overwrites the stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when validation fails,
    /// [`TaskLifecycleError::NotFound`] when no task has the identifier, or
    /// [`TaskLifecycleError::Repository`] when the write fails.
    pub async fn update(&self, id: TaskId, draft: TaskDraft) -> TaskLifecycleResult<Task> {
        let details = validate_and_normalize(draft, self.today())?;
        let task = Task::new(id, details);
        self.repository
            .update(&task)
            .await
            .map_err(not_found_or_repository)?;
        info!(task_id = %task.id(), due_date = %task.date(), "task updated");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the
    /// identifier or [`TaskLifecycleError::Repository`] when the delete
    /// fails.
    pub async fn delete(&self, id: &TaskId) -> TaskLifecycleResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(not_found_or_repository)?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Marks a task as done.
    ///
    /// A one-off task is deleted. A recurring task is moved to its next
    /// occurrence after today and keeps its identifier, title, and comment.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// or vanishes before the reschedule is written,
    /// [`TaskLifecycleError::Recurrence`] when the stored rule is invalid,
    /// and [`TaskLifecycleError::Repository`] for any storage failure,
    /// including a one-off delete that affects no rows.
    pub async fn complete(&self, id: &TaskId) -> TaskLifecycleResult<()> {
        let mut task = self.get(id).await?;

        if task.is_one_off() {
            self.repository.delete(task.id()).await?;
            info!(task_id = %id, "one-off task completed and deleted");
            return Ok(());
        }

        let previous = task.date();
        let next = next_occurrence(self.today(), &previous.canonical(), task.repeat())?;
        task.reschedule(next);
        self.repository.update(&task).await.map_err(|err| {
            if matches!(err, TaskRepositoryError::NotFound(_)) {
                warn!(task_id = %id, "task disappeared before reschedule was written");
            }
            not_found_or_repository(err)
        })?;
        info!(
            task_id = %id,
            previous_due_date = %previous,
            due_date = %next,
            "recurring task rescheduled"
        );
        Ok(())
    }
}

/// Computes the next occurrence for an explicit reference day.
///
/// Unlike the service methods this takes `now` from the caller, so clients
/// can preview a rule before saving a task.
///
/// # Errors
///
/// Returns [`TaskLifecycleError::Domain`] with
/// [`TaskDomainError::BadDate`] when `now` is not `YYYYMMDD`, and
/// [`TaskLifecycleError::Recurrence`] when the rule or `date` is invalid.
pub fn preview_next_date(now: &str, date: &str, repeat: &str) -> TaskLifecycleResult<DueDate> {
    let reference = DueDate::parse(now).map_err(|err| TaskDomainError::BadDate(err.0))?;
    Ok(next_occurrence(reference.as_naive(), date, repeat)?)
}
