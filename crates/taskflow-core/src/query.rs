use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

use crate::collate;
use crate::task::{FilterCategory, Task, VocabularyError};
use crate::text_matcher::TextMatcher;

/// Display ordering selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOption {
    /// Most recently created first.
    #[default]
    #[serde(rename = "newest")]
    Newest,
    /// Oldest first.
    #[serde(rename = "oldest")]
    Oldest,
    /// Alphabetical by text.
    #[serde(rename = "a-z")]
    AToZ,
    /// Reverse alphabetical by text.
    #[serde(rename = "z-a")]
    ZToA,
}

impl SortOption {
    /// Every option in menu order.
    pub const ALL: [Self; 4] = [Self::Newest, Self::Oldest, Self::AToZ, Self::ZToA];

    /// Wire and display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::AToZ => "a-z",
            Self::ZToA => "z-a",
        }
    }

    /// Comparator for this option. Ties compare equal so a stable sort keeps storage order.
    #[must_use]
    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::Newest => b.created_at.cmp(&a.created_at),
            Self::Oldest => a.created_at.cmp(&b.created_at),
            Self::AToZ => collate::compare(&a.text, &b.text),
            Self::ZToA => collate::compare(&b.text, &a.text),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| VocabularyError::SortOption {
                token: s.to_owned(),
            })
    }
}

/// View parameters applied to a task collection: category filter, then text
/// search, then sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    /// Category restriction.
    pub category: FilterCategory,
    /// Raw search text as typed.
    pub search: String,
    /// Output ordering.
    pub sort: SortOption,
}

impl TaskQuery {
    /// Query that keeps every task in newest-first order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<FilterCategory>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the ordering.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Project `tasks` into display order. The input is left untouched.
    #[must_use]
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        let matcher = TextMatcher::new(&self.search);
        let mut visible: Vec<Task> = tasks
            .iter()
            .filter(|task| self.category.matches(task.category))
            .filter(|task| matcher.as_ref().is_none_or(|m| m.matches(task)))
            .cloned()
            .collect();
        // `sort_by` is stable: equal keys keep their storage order.
        visible.sort_by(|a, b| self.sort.compare(a, b));
        visible
    }
}
