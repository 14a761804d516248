//! Application services for task scheduling orchestration.

mod config;
mod lifecycle;

pub use config::{DEFAULT_LIST_LIMIT, SchedulerConfig};
pub use lifecycle::{
    TaskErrorKind, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
    preview_next_date,
};
