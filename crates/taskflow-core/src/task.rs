use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;
use time::{Date, OffsetDateTime};

use crate::id::TaskId;

/// Error returned when a user-facing token does not name a known value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// Not a category name.
    #[error("unknown category: {token} (expected Personal, Work, School, Shopping or Other)")]
    Category {
        /// Input as given.
        token: String,
    },
    /// Neither `All` nor a category name.
    #[error("unknown filter category: {token} (expected All or a category)")]
    FilterCategory {
        /// Input as given.
        token: String,
    },
    /// Not a sort option token.
    #[error("unknown sort option: {token} (expected newest, oldest, a-z or z-a)")]
    SortOption {
        /// Input as given.
        token: String,
    },
}

/// Closed classification tag carried by every task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Category {
    /// Personal errands (the default).
    #[default]
    Personal,
    /// Job-related work.
    Work,
    /// Coursework and study.
    School,
    /// Things to buy.
    Shopping,
    /// Anything else.
    Other,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 5] = [
        Self::Personal,
        Self::Work,
        Self::School,
        Self::Shopping,
        Self::Other,
    ];

    /// Wire and display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Work => "Work",
            Self::School => "School",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| VocabularyError::Category {
                token: s.to_owned(),
            })
    }
}

/// View-level category selector; adds `All` on top of [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterCategory {
    /// No restriction.
    #[default]
    All,
    /// Only tasks tagged with this category.
    Only(Category),
}

impl FilterCategory {
    /// Whether a task tagged with `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Wire and display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.as_str(),
        }
    }
}

impl From<Category> for FilterCategory {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Category>()
            .map(Self::Only)
            .map_err(|_| VocabularyError::FilterCategory {
                token: s.to_owned(),
            })
    }
}

impl Serialize for FilterCategory {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FilterCategory {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A single to-do item.
///
/// Field names serialize in camel case (`createdAt`) so collections written by
/// the browser version of the app load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier, fixed at creation.
    pub id: TaskId,
    /// Trimmed, non-empty display text.
    pub text: String,
    /// Category tag.
    pub category: Category,
    /// Completion flag.
    pub completed: bool,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Task {
    /// Build a fresh, incomplete task. Returns `None` when `text` trims to empty.
    #[must_use]
    pub fn new(text: &str, category: Category, created_at: i64) -> Option<Self> {
        let text = normalize_text(text)?;
        Some(Self {
            id: TaskId::new(),
            text,
            category,
            completed: false,
            created_at,
        })
    }

    /// Calendar date (UTC) the task was created on.
    #[must_use]
    pub fn created_date(&self) -> Option<Date> {
        let nanos = i128::from(self.created_at) * 1_000_000;
        OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .ok()
            .map(OffsetDateTime::date)
    }
}

/// Trim user input; `None` when nothing but whitespace remains.
#[must_use]
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn new_task_trims_and_starts_incomplete() {
        let Some(task) = Task::new("  Buy milk \n", Category::Shopping, 42) else {
            panic!("non-blank text must produce a task");
        };
        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.category, Category::Shopping);
        assert!(!task.completed);
        assert_eq!(task.created_at, 42);
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(Task::new("", Category::Work, 0).is_none());
        assert!(Task::new(" \t\n ", Category::Work, 0).is_none());
        assert!(normalize_text("   ").is_none());
    }

    #[test]
    fn category_parsing_is_case_insensitive() {
        assert_eq!("work".parse::<Category>(), Ok(Category::Work));
        assert_eq!(" SHOPPING ".parse::<Category>(), Ok(Category::Shopping));
        assert!(matches!(
            "chores".parse::<Category>(),
            Err(VocabularyError::Category { .. })
        ));
    }

    #[test]
    fn filter_category_all_matches_everything() {
        for category in Category::ALL {
            assert!(FilterCategory::All.matches(category));
        }
        let work = FilterCategory::from(Category::Work);
        assert!(work.matches(Category::Work));
        assert!(!work.matches(Category::School));
        assert_eq!("all".parse::<FilterCategory>(), Ok(FilterCategory::All));
        assert_eq!("School".parse::<FilterCategory>(), Ok(FilterCategory::Only(Category::School)));
        assert!(matches!(
            "nope".parse::<FilterCategory>(),
            Err(VocabularyError::FilterCategory { .. })
        ));
    }

    #[test]
    fn task_json_uses_browser_field_names() {
        let json = r#"{"id":"3b241101-e2bb-4255-8caf-4136c566a962","text":"Write report","category":"Work","completed":true,"createdAt":1700000000000}"#;
        let task: Task = serde_json::from_str(json).unwrap_or_else(|err| panic!("must parse: {err}"));
        assert_eq!(task.text, "Write report");
        assert_eq!(task.category, Category::Work);
        assert!(task.completed);
        assert_eq!(task.created_at, 1_700_000_000_000);

        let value = serde_json::to_value(&task).unwrap_or_else(|err| panic!("must serialize: {err}"));
        assert_eq!(value["createdAt"], 1_700_000_000_000_i64);
        assert_eq!(value["category"], "Work");
        assert_eq!(value["id"], "3b241101-e2bb-4255-8caf-4136c566a962");
    }

    #[test]
    fn created_date_uses_utc_calendar_day() {
        let Some(task) = Task::new("x", Category::Other, 1_700_000_000_000) else {
            panic!("task must exist");
        };
        assert_eq!(task.created_date(), Some(date!(2023 - 11 - 14)));
    }
}
