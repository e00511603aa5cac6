//! Light/dark theme flag persisted as a JSON boolean.

use std::fmt;

use taskflow_storage::{KeyValueStore, StoreAdapter};
use tracing::{info, warn};

/// Storage key holding the dark-mode flag.
pub const THEME_KEY: &str = "taskflow-theme";

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light scheme (the default).
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// Map the stored dark-mode flag to a theme.
    #[must_use]
    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Whether this is the dark scheme.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other scheme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Read the stored preference; light when absent or corrupt.
    #[must_use]
    pub fn load<K: KeyValueStore>(adapter: &StoreAdapter<K>) -> Self {
        Self::from_dark(adapter.load(THEME_KEY, false))
    }

    /// Persist this preference. Failures are logged, not returned.
    pub fn save<K: KeyValueStore>(self, adapter: &StoreAdapter<K>) {
        if let Err(err) = adapter.save(THEME_KEY, &self.is_dark()) {
            warn!(key = THEME_KEY, error = %err, "Failed to save theme");
        }
    }

    /// Switch to the other scheme, persist it and return it.
    ///
    /// The result does not depend on the save succeeding.
    pub fn toggle<K: KeyValueStore>(self, adapter: &StoreAdapter<K>) -> Self {
        let next = self.toggled();
        next.save(adapter);
        info!(theme = next.as_str(), "Switched theme");
        next
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
