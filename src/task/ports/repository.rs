//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskDetails, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Identifier allocation and existence checks belong to the implementation.
/// Updates and deletes that affect no rows must report
/// [`TaskRepositoryError::NotFound`]; callers rely on that to detect a task
/// removed by a concurrent request.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store fails.
    async fn create(&self, details: &TaskDetails) -> TaskRepositoryResult<TaskId>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns up to `limit` tasks ordered by due date ascending.
    async fn list(&self, limit: usize) -> TaskRepositoryResult<Vec<Task>>;

    /// Overwrites the stored fields of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task has the
    /// identifier.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task has the
    /// identifier.
    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found, or the write affected zero rows.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
