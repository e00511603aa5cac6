//! One presentation session: tasks, view parameters and theme behind a single
//! intent → change → render loop.

use taskflow_core::{Category, Clock, FilterCategory, SortOption, SystemClock, Task, TaskId, TaskStats};
use taskflow_storage::{KeyValueStore, StoreAdapter};

use crate::task_store::{TaskChange, TaskStore};
use crate::theme::Theme;
use crate::view_state::{EmptyState, ViewState};

/// User intent forwarded by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Submit the new-task form.
    Add {
        /// Text as typed.
        text: String,
        /// Selected category.
        category: Category,
    },
    /// Save an inline edit.
    Edit {
        /// Task being edited.
        id: TaskId,
        /// Replacement text as typed.
        text: String,
    },
    /// Delete a task.
    Delete(TaskId),
    /// Tick or untick a task.
    Toggle(TaskId),
    /// Pick a category filter.
    SetCategory(FilterCategory),
    /// Type into the search box.
    SetSearch(String),
    /// Pick a sort order.
    SetSort(SortOption),
    /// Flip light/dark mode.
    ToggleTheme,
}

/// Observable result of an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The task collection changed (and was saved).
    Tasks(TaskChange),
    /// A view parameter changed; only the visible list needs recomputing.
    ViewChanged,
    /// The theme switched.
    ThemeChanged(Theme),
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
    /// Tasks to list, in display order.
    pub visible: Vec<Task>,
    /// Counters over the whole collection.
    pub stats: TaskStats,
    /// Active colour scheme.
    pub theme: Theme,
    /// Set when `visible` is empty.
    pub empty: Option<EmptyState>,
}

/// Owned application state for one front end.
#[derive(Debug)]
pub struct Session<K, C = SystemClock> {
    tasks: TaskStore<K, C>,
    view: ViewState,
    theme: Theme,
}

impl<K: KeyValueStore + Clone> Session<K> {
    /// Load tasks and theme from `store` and start with `view`.
    #[must_use]
    pub fn open(store: K, view: ViewState) -> Self {
        Self::with_clock(store, view, SystemClock)
    }
}

impl<K: KeyValueStore + Clone, C: Clock> Session<K, C> {
    /// Load tasks and theme from `store` using an explicit clock.
    #[must_use]
    pub fn with_clock(store: K, view: ViewState, clock: C) -> Self {
        let theme = Theme::load(&StoreAdapter::new(store.clone()));
        let tasks = TaskStore::with_clock(StoreAdapter::new(store), clock);
        Self { tasks, view, theme }
    }

    /// Apply one intent. `None` means nothing changed.
    pub fn dispatch(&mut self, intent: Intent) -> Option<SessionEvent> {
        match intent {
            Intent::Add { text, category } => self.tasks.add(&text, category).map(SessionEvent::Tasks),
            Intent::Edit { id, text } => self.tasks.edit(id, &text).map(SessionEvent::Tasks),
            Intent::Delete(id) => self.tasks.delete(id).map(SessionEvent::Tasks),
            Intent::Toggle(id) => self.tasks.toggle_complete(id).map(SessionEvent::Tasks),
            Intent::SetCategory(category) => {
                self.view.set_category(category).then_some(SessionEvent::ViewChanged)
            }
            Intent::SetSearch(search) => self.view.set_search(search).then_some(SessionEvent::ViewChanged),
            Intent::SetSort(sort) => self.view.set_sort(sort).then_some(SessionEvent::ViewChanged),
            Intent::ToggleTheme => {
                self.theme = self.theme.toggle(self.tasks.adapter());
                Some(SessionEvent::ThemeChanged(self.theme))
            }
        }
    }

    /// Compute the current frame.
    #[must_use]
    pub fn render(&self) -> Render {
        let visible = self.view.visible(self.tasks.tasks());
        let empty = visible
            .is_empty()
            .then(|| ViewState::empty_state(self.tasks.len()));
        Render {
            visible,
            stats: self.tasks.stats(),
            theme: self.theme,
            empty,
        }
    }

    /// The task collection.
    #[must_use]
    pub const fn tasks(&self) -> &TaskStore<K, C> {
        &self.tasks
    }

    /// Current view parameters.
    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// Current theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }
}
