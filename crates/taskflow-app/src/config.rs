use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer};
use taskflow_core::{Category, FilterCategory, SortOption};

use crate::view_state::ViewState;

/// File name of the configuration inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration loaded from `<data dir>/config.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Where task and theme values are kept.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Initial values for new tasks and sessions.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl AppConfig {
    /// Load configuration from `dir`; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, parsed or validated.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let config_path = dir.as_ref().join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        Self::parse(&contents).with_context(|| format!("failed to parse {}", config_path.display()))
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or a value is invalid.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Directory that holds task and theme data, given the directory the config was read from.
    #[must_use]
    pub fn data_dir(&self, base: &Path) -> PathBuf {
        self.storage
            .dir
            .as_ref()
            .map_or_else(|| base.to_path_buf(), |dir| base.join(dir))
    }

    /// Initial view parameters for a new session.
    #[must_use]
    pub fn initial_view(&self) -> ViewState {
        ViewState::new(self.defaults.filter(), self.defaults.sort())
    }

    fn validate(&self) -> Result<()> {
        self.storage.ensure_valid_dir()
    }
}

/// `[storage]` block.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    /// Overrides the data directory. Relative paths resolve against the config directory.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl StorageConfig {
    fn ensure_valid_dir(&self) -> Result<()> {
        if self
            .dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().to_string_lossy().trim().is_empty())
        {
            bail!("storage.dir must not be empty");
        }
        Ok(())
    }
}

/// `[defaults]` block.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DefaultsConfig {
    #[serde(default, deserialize_with = "from_token")]
    category: Option<Category>,
    #[serde(default, deserialize_with = "from_token")]
    sort: Option<SortOption>,
    #[serde(default, deserialize_with = "from_token")]
    filter: Option<FilterCategory>,
}

impl DefaultsConfig {
    /// Category used when a task is added without one.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category.unwrap_or_default()
    }

    /// Initial sort order.
    #[must_use]
    pub fn sort(&self) -> SortOption {
        self.sort.unwrap_or_default()
    }

    /// Initial category filter.
    #[must_use]
    pub fn filter(&self) -> FilterCategory {
        self.filter.unwrap_or_default()
    }
}

fn from_token<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = String::deserialize(d)?;
    raw.parse().map(Some).map_err(serde::de::Error::custom)
}
