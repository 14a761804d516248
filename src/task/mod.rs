//! Task scheduling for the personal scheduler.
//!
//! This module validates client task drafts, keeps every stored due date on
//! or after today, and reschedules recurring tasks when they are marked done.
//! One-off tasks are deleted on completion. The module follows hexagonal
//! architecture:
//!
//! - Domain types and the recurrence engine in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
