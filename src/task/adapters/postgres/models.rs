//! Diesel row models for task persistence.

use super::schema::scheduler;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = scheduler)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Storage-assigned task identifier.
    pub id: i64,
    /// Due date in canonical `YYYYMMDD` form.
    pub due_date: String,
    /// Task title.
    pub title: String,
    /// Free-text comment.
    pub comment: String,
    /// Recurrence rule text.
    pub repeat_rule: String,
}

/// Insert and update model for task records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = scheduler)]
pub struct TaskFieldsRow {
    /// Due date in canonical `YYYYMMDD` form.
    pub due_date: String,
    /// Task title.
    pub title: String,
    /// Free-text comment.
    pub comment: String,
    /// Recurrence rule text.
    pub repeat_rule: String,
}
