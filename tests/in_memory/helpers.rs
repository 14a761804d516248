//! Shared test helpers for in-memory scheduler integration tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use scheduler::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{DueDate, TaskDetails, TaskId},
    ports::TaskRepository,
    services::TaskLifecycleService,
};

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to the start of the given UTC day.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is not a real calendar day.
    pub fn on(year: i32, month: u32, day: u32) -> Result<Self, eyre::Report> {
        let instant = Utc
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .ok_or_else(|| eyre::eyre!("invalid day {year}-{month}-{day}"))?;
        Ok(Self(instant))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Service type used by the in-memory integration tests.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository, FixedClock>;

/// Service wired to an in-memory repository that tests can also seed
/// directly.
pub struct Harness {
    pub repository: Arc<InMemoryTaskRepository>,
    pub service: TestService,
}

/// Provides a scheduler whose clock reads 2026-10-19.
///
/// # Errors
///
/// Returns an error if the fixed clock cannot be built.
#[fixture]
pub fn harness() -> Result<Harness, eyre::Report> {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let clock = Arc::new(FixedClock::on(2026, 10, 19)?);
    let service = TaskLifecycleService::new(Arc::clone(&repository), clock);
    Ok(Harness {
        repository,
        service,
    })
}

/// Stores a task without validation so tests can start from a past due
/// date.
///
/// # Errors
///
/// Returns an error if the date is malformed or the store fails.
pub async fn seed_task(
    repository: &InMemoryTaskRepository,
    date: &str,
    title: &str,
    repeat: &str,
) -> Result<TaskId, eyre::Report> {
    let due = DueDate::parse(date)?;
    let details = TaskDetails::from_parts(due, title, "", repeat);
    Ok(repository.create(&details).await?)
}
