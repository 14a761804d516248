//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{TaskFieldsRow, TaskRow},
    schema::scheduler,
};
use crate::task::{
    domain::{DueDate, Task, TaskDetails, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
///
/// Identifiers are the decimal text of the `BIGSERIAL` primary key. An
/// identifier that is not a decimal integer cannot name a row and is treated
/// as not found.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, details: &TaskDetails) -> TaskRepositoryResult<TaskId> {
        let new_row = to_fields_row(details);
        self.run_blocking(move |connection| {
            let id = diesel::insert_into(scheduler::table)
                .values(&new_row)
                .returning(scheduler::id)
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(TaskId::new(id.to_string()))
        })
        .await
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let Some(row_id) = parse_row_id(id) else {
            return Ok(None);
        };
        self.run_blocking(move |connection| {
            let row = scheduler::table
                .find(row_id)
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self, limit: usize) -> TaskRepositoryResult<Vec<Task>> {
        let row_limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.run_blocking(move |connection| {
            let rows = scheduler::table
                .order((scheduler::due_date.asc(), scheduler::id.asc()))
                .limit(row_limit)
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id().clone();
        let Some(row_id) = parse_row_id(&task_id) else {
            return Err(TaskRepositoryError::NotFound(task_id));
        };
        let changes = to_fields_row(task.details());
        self.run_blocking(move |connection| {
            let affected = diesel::update(scheduler::table.find(row_id))
                .set(&changes)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let task_id = id.clone();
        let Some(row_id) = parse_row_id(&task_id) else {
            return Err(TaskRepositoryError::NotFound(task_id));
        };
        self.run_blocking(move |connection| {
            let affected = diesel::delete(scheduler::table.find(row_id))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }
}

fn parse_row_id(id: &TaskId) -> Option<i64> {
    id.as_str().parse().ok()
}

fn to_fields_row(details: &TaskDetails) -> TaskFieldsRow {
    TaskFieldsRow {
        due_date: details.date().canonical(),
        title: details.title().to_owned(),
        comment: details.comment().to_owned(),
        repeat_rule: details.repeat().to_owned(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        due_date,
        title,
        comment,
        repeat_rule,
    } = row;

    let date = DueDate::parse(&due_date).map_err(TaskRepositoryError::persistence)?;
    let details = TaskDetails::from_parts(date, title, comment, repeat_rule);
    Ok(Task::new(TaskId::new(id.to_string()), details))
}
