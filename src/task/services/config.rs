//! Configuration for the task scheduling service.

use serde::Deserialize;

/// Default cap on the number of tasks returned by a listing.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Tunable service settings.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Maximum number of tasks returned by [`super::TaskLifecycleService::list`].
    pub list_limit: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}
