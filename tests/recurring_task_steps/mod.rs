//! Step definitions for recurring task completion scenarios.

pub mod world;
