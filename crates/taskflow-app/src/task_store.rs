//! Owned task collection; the only place tasks are mutated.

use std::collections::HashSet;

use taskflow_core::{
    Category, Clock, SystemClock, Task, TaskId, TaskQuery, TaskStats, normalize_text,
};
use taskflow_storage::{KeyValueStore, StoreAdapter};
use tracing::{debug, info, warn};

/// Storage key holding the serialized task collection.
pub const TASKS_KEY: &str = "taskflow-data";

/// Change applied by a [`TaskStore`] operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskChange {
    /// A task was created and prepended.
    Added(TaskId),
    /// A task's text was replaced.
    Edited(TaskId),
    /// A task was removed.
    Deleted(TaskId),
    /// A task's completion flag was flipped.
    Toggled {
        /// Affected task.
        id: TaskId,
        /// Flag value after the flip.
        completed: bool,
    },
}

impl TaskChange {
    /// Task the change applies to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        match *self {
            Self::Added(id) | Self::Edited(id) | Self::Deleted(id) | Self::Toggled { id, .. } => id,
        }
    }
}

/// Authoritative, newest-first task collection that persists after every change.
///
/// Operations never fail: invalid text and unknown ids are no-ops reported as
/// `None`, and a failed save is logged while the in-memory change stands.
#[derive(Debug)]
pub struct TaskStore<K, C = SystemClock> {
    adapter: StoreAdapter<K>,
    clock: C,
    tasks: Vec<Task>,
}

impl<K: KeyValueStore> TaskStore<K> {
    /// Load the collection stored behind `adapter`, stamping new tasks with the wall clock.
    #[must_use]
    pub fn open(adapter: StoreAdapter<K>) -> Self {
        Self::with_clock(adapter, SystemClock)
    }
}

impl<K: KeyValueStore, C: Clock> TaskStore<K, C> {
    /// Load the collection stored behind `adapter` using an explicit clock.
    #[must_use]
    pub fn with_clock(adapter: StoreAdapter<K>, clock: C) -> Self {
        let loaded: Vec<Task> = adapter.load(TASKS_KEY, Vec::new());
        let tasks = sanitize(loaded);
        debug!(count = tasks.len(), "Loaded tasks");
        Self {
            adapter,
            clock,
            tasks,
        }
    }

    /// Create a task and place it first. No-op when `text` trims to empty.
    pub fn add(&mut self, text: &str, category: Category) -> Option<TaskChange> {
        let mut task = Task::new(text, category, self.clock.now_millis())?;
        while self.contains(task.id) {
            task.id = TaskId::new();
        }
        let id = task.id;
        self.tasks.insert(0, task);
        self.persist();
        info!(%id, %category, "Added task");
        Some(TaskChange::Added(id))
    }

    /// Replace the text of task `id`. No-op when the id is unknown or `new_text` trims to empty.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> Option<TaskChange> {
        let text = normalize_text(new_text)?;
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.text = text;
        self.persist();
        info!(%id, "Edited task");
        Some(TaskChange::Edited(id))
    }

    /// Remove task `id`. No-op when it is absent.
    pub fn delete(&mut self, id: TaskId) -> Option<TaskChange> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        self.tasks.remove(index);
        self.persist();
        info!(%id, "Deleted task");
        Some(TaskChange::Deleted(id))
    }

    /// Flip the completion flag of task `id`. No-op when it is absent.
    pub fn toggle_complete(&mut self, id: TaskId) -> Option<TaskChange> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        let completed = task.completed;
        self.persist();
        info!(%id, completed, "Toggled task");
        Some(TaskChange::Toggled { id, completed })
    }

    /// Tasks in storage order (newest first).
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Whether a task with `id` exists.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Counters over the whole collection, regardless of any view.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Tasks in display order for `query`.
    #[must_use]
    pub fn view(&self, query: &TaskQuery) -> Vec<Task> {
        query.apply(&self.tasks)
    }

    /// Borrow the storage adapter.
    #[must_use]
    pub const fn adapter(&self) -> &StoreAdapter<K> {
        &self.adapter
    }

    fn persist(&self) {
        if let Err(err) = self.adapter.save(TASKS_KEY, &self.tasks) {
            warn!(key = TASKS_KEY, error = %err, "Failed to save tasks");
        }
    }
}

/// Drop entries that break collection invariants (blank text, repeated ids).
fn sanitize(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::with_capacity(tasks.len());
    let mut kept = Vec::with_capacity(tasks.len());
    for mut task in tasks {
        let Some(text) = normalize_text(&task.text) else {
            warn!(id = %task.id, "Dropping stored task with blank text");
            continue;
        };
        if !seen.insert(task.id) {
            warn!(id = %task.id, "Dropping stored task with duplicate id");
            continue;
        }
        task.text = text;
        kept.push(task);
    }
    kept
}
