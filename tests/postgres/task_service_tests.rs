//! Lifecycle operations routed through the `PostgreSQL` adapter.
//!
//! The service runs on the real clock, so every due date here is far enough
//! in the future to make results independent of the current day.

use super::helpers::{PostgresHarness, postgres_harness};
use rstest::rstest;
use scheduler::task::{domain::TaskDraft, services::TaskErrorKind};

#[rstest]
fn unchecked_long_rule_on_future_task_is_stored(
    postgres_harness: Result<PostgresHarness, eyre::Report>,
) -> Result<(), eyre::Report> {
    let harness = postgres_harness?;
    let repeat = "w".repeat(200);
    let draft = TaskDraft::new("Someday")
        .with_date("20991231")
        .with_repeat(repeat.clone());

    let created = harness.runtime.block_on(harness.service.create(draft))?;
    let fetched = harness.runtime.block_on(harness.service.get(created.id()))?;

    eyre::ensure!(fetched.repeat() == repeat, "rule text was not kept verbatim");
    eyre::ensure!(fetched.date().canonical() == "20991231", "due date changed");
    Ok(())
}

#[rstest]
fn completing_recurring_task_moves_it_one_step(
    postgres_harness: Result<PostgresHarness, eyre::Report>,
) -> Result<(), eyre::Report> {
    let harness = postgres_harness?;
    let id = harness.seed("20990101", "Backup laptop", "external drive", "d7")?;

    harness.runtime.block_on(harness.service.complete(&id))?;
    let task = harness.runtime.block_on(harness.service.get(&id))?;

    eyre::ensure!(
        task.date().canonical() == "20990108",
        "expected 20990108, got {}",
        task.date()
    );
    eyre::ensure!(task.comment() == "external drive", "comment changed");
    Ok(())
}

#[rstest]
fn completing_one_off_task_deletes_its_row(
    postgres_harness: Result<PostgresHarness, eyre::Report>,
) -> Result<(), eyre::Report> {
    let harness = postgres_harness?;
    let id = harness.seed("20990101", "Buy milk", "", "")?;

    harness.runtime.block_on(harness.service.complete(&id))?;
    let lookup = harness.runtime.block_on(harness.service.get(&id));

    eyre::ensure!(
        lookup.as_ref().map_err(|err| err.kind()).err() == Some(TaskErrorKind::TaskNotFound),
        "task {id} should be gone"
    );
    Ok(())
}
