use crate::task::Task;

/// Case-insensitive substring matcher for task text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatcher {
    needle: String,
}

impl TextMatcher {
    /// Normalize a query string into a matcher. Returns `None` for blank inputs.
    ///
    /// Only an all-whitespace query disables matching; otherwise the query is
    /// kept as typed (surrounding whitespace included) and lowercased.
    #[must_use]
    pub fn new(query: &str) -> Option<Self> {
        if query.trim().is_empty() {
            return None;
        }
        Some(Self {
            needle: query.to_lowercase(),
        })
    }

    /// Determine whether the task text contains the query.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_text(&task.text)
    }

    /// Determine whether `value` contains the query.
    #[must_use]
    pub fn matches_text(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.needle)
    }
}
