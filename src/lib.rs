//! Scheduler: personal task scheduling with recurring due dates.
//!
//! Clients create tasks with a title, an optional comment, a due date and an
//! optional recurrence rule. The crate keeps due dates valid and never in the
//! past, and computes the next occurrence when a recurring task is done.
//!
//! # Architecture
//!
//! Scheduler follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Recurrence engine, draft validation, and task lifecycle

pub mod task;
