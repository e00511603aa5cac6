//! Domain types, query pipeline and stats for taskflow.

/// Clock abstraction used to stamp new tasks.
pub mod clock;
/// Locale-style string ordering for lexical sorts.
pub mod collate;
/// Identifier types.
pub mod id;
/// Filter, search and sort pipeline.
pub mod query;
/// Aggregate counters over a task collection.
pub mod stats;
/// Task record and its closed vocabularies.
pub mod task;
/// Case-insensitive substring matcher.
pub mod text_matcher;

pub use clock::{Clock, ManualClock, SystemClock};
pub use id::TaskId;
pub use query::{SortOption, TaskQuery};
pub use stats::TaskStats;
pub use task::{Category, FilterCategory, Task, VocabularyError, normalize_text};
pub use text_matcher::TextMatcher;
