use serde::Serialize;

use crate::task::Task;

/// Completion counters over a full task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Tasks marked completed.
    pub completed: usize,
    /// Tasks still open.
    pub pending: usize,
}

impl TaskStats {
    /// Count `tasks`. Pass the unfiltered collection, not a query result.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }
}
