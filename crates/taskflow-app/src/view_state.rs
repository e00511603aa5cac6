//! Per-session view parameters (category filter, search text, sort order).

use taskflow_core::{FilterCategory, SortOption, Task, TaskQuery};

/// Why a view has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The collection itself is empty.
    NoTasks,
    /// Tasks exist but the current filters hide all of them.
    NoMatches,
}

impl EmptyState {
    /// Headline shown for an empty view.
    pub const TITLE: &'static str = "No tasks found";

    /// Hint shown under the headline.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::NoTasks => "Get started by adding a task above!",
            Self::NoMatches => "Try adjusting your filters.",
        }
    }
}

/// View parameters owned by one presentation session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    query: TaskQuery,
}

impl ViewState {
    /// Start with the given filter and sort and an empty search.
    #[must_use]
    pub fn new(category: FilterCategory, sort: SortOption) -> Self {
        Self {
            query: TaskQuery::new().with_category(category).with_sort(sort),
        }
    }

    /// Current parameters as a query.
    #[must_use]
    pub const fn query(&self) -> &TaskQuery {
        &self.query
    }

    /// Update the category filter. Returns `true` when the value changed.
    pub fn set_category(&mut self, category: FilterCategory) -> bool {
        replace_if_changed(&mut self.query.category, category)
    }

    /// Update the search text. Returns `true` when the value changed.
    pub fn set_search(&mut self, search: impl Into<String>) -> bool {
        replace_if_changed(&mut self.query.search, search.into())
    }

    /// Update the sort order. Returns `true` when the value changed.
    pub fn set_sort(&mut self, sort: SortOption) -> bool {
        replace_if_changed(&mut self.query.sort, sort)
    }

    /// Tasks to display, recomputed from scratch.
    #[must_use]
    pub fn visible(&self, tasks: &[Task]) -> Vec<Task> {
        self.query.apply(tasks)
    }

    /// Classify an empty result given the size of the full collection.
    #[must_use]
    pub const fn empty_state(total: usize) -> EmptyState {
        if total == 0 {
            EmptyState::NoTasks
        } else {
            EmptyState::NoMatches
        }
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskflow_core::{Category, TaskId};

    #[test]
    fn setters_report_changes() {
        let mut view = ViewState::default();
        assert!(!view.set_category(FilterCategory::All));
        assert!(view.set_category(Category::Work.into()));
        assert!(!view.set_category(Category::Work.into()));
        assert!(view.set_search("milk"));
        assert!(!view.set_search("milk"));
        assert!(view.set_sort(SortOption::AToZ));
        assert_eq!(view.query().sort, SortOption::AToZ);
        assert_eq!(view.query().search, "milk");
    }

    #[test]
    fn visible_applies_query() {
        let tasks = vec![
            Task {
                id: TaskId::new(),
                text: "Buy milk".into(),
                category: Category::Shopping,
                completed: false,
                created_at: 1,
            },
            Task {
                id: TaskId::new(),
                text: "Write report".into(),
                category: Category::Work,
                completed: false,
                created_at: 2,
            },
        ];
        let view = ViewState::new(Category::Work.into(), SortOption::Newest);
        let visible = view.visible(&tasks);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].text, "Write report");
    }

    #[test]
    fn empty_state_distinguishes_no_tasks_from_no_matches() {
        assert_eq!(ViewState::empty_state(0), EmptyState::NoTasks);
        assert_eq!(ViewState::empty_state(3), EmptyState::NoMatches);
        assert_eq!(EmptyState::NoTasks.hint(), "Get started by adding a task above!");
        assert_eq!(EmptyState::NoMatches.hint(), "Try adjusting your filters.");
    }
}
