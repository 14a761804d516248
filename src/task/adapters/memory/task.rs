//! In-memory repository for task scheduling tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::task::{
    domain::{Task, TaskDetails, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are random UUID strings. Listing orders by due date and then
/// by insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, StoredTask>,
    next_sequence: u64,
}

#[derive(Debug, Clone)]
struct StoredTask {
    sequence: u64,
    task: Task,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: &impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, details: &TaskDetails) -> TaskRepositoryResult<TaskId> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let id = TaskId::new(Uuid::new_v4().to_string());
        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.tasks.insert(
            id.clone(),
            StoredTask {
                sequence,
                task: Task::new(id.clone(), details.clone()),
            },
        );
        Ok(id)
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.tasks.get(id).map(|stored| stored.task.clone()))
    }

    async fn list(&self, limit: usize) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        let mut stored: Vec<&StoredTask> = state.tasks.values().collect();
        stored.sort_by_key(|entry| (entry.task.date(), entry.sequence));
        Ok(stored
            .into_iter()
            .take(limit)
            .map(|entry| entry.task.clone())
            .collect())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let stored = state
            .tasks
            .get_mut(task.id())
            .ok_or_else(|| TaskRepositoryError::NotFound(task.id().clone()))?;
        stored.task = task.clone();
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        state
            .tasks
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))
    }
}
