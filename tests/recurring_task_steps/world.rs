//! Shared world state for recurring task completion BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveTime, Utc};
use mockable::Clock;
use rstest::fixture;
use scheduler::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{DueDate, TaskId},
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Clock pinned to midnight UTC of a scenario day.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioClock(DateTime<Utc>);

impl ScenarioClock {
    /// Pins the clock to the start of `day`.
    pub fn on(day: DueDate) -> Self {
        Self(day.as_naive().and_time(NaiveTime::MIN).and_utc())
    }
}

impl Clock for ScenarioClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, ScenarioClock>;

/// Scenario world for task completion behaviour tests.
pub struct RecurringTaskWorld {
    pub repository: Arc<InMemoryTaskRepository>,
    pub service: Option<TestTaskService>,
    pub task_id: Option<TaskId>,
    pub last_completion: Option<Result<(), TaskLifecycleError>>,
}

impl RecurringTaskWorld {
    /// Creates a world with an empty repository and no clock yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: Arc::new(InMemoryTaskRepository::new()),
            service: None,
            task_id: None,
            last_completion: None,
        }
    }

    /// Returns the service configured by the "today is" step.
    pub fn service(&self) -> Result<&TestTaskService, eyre::Report> {
        self.service
            .as_ref()
            .ok_or_else(|| eyre::eyre!("scenario did not set today's date"))
    }

    /// Returns the task seeded by a given step.
    pub fn task_id(&self) -> Result<&TaskId, eyre::Report> {
        self.task_id
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing seeded task in scenario world"))
    }
}

impl Default for RecurringTaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RecurringTaskWorld {
    RecurringTaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
