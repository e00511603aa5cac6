use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::KeyValueStore;
use crate::error::{Result, StoreError};

/// JSON load/save boundary over a [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct StoreAdapter<K> {
    store: K,
}

impl<K> StoreAdapter<K> {
    /// Wrap a raw store.
    #[must_use]
    pub const fn new(store: K) -> Self {
        Self { store }
    }

    /// Borrow the raw store.
    #[must_use]
    pub const fn store(&self) -> &K {
        &self.store
    }
}

impl<K: KeyValueStore> StoreAdapter<K> {
    /// Load the value stored under `key`, or `default` when it is missing,
    /// unreadable or does not parse. Never fails.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "No stored value, using default");
                return default;
            }
            Err(err) => {
                warn!(key, error = %err, "Failed to read stored value, using default");
                return default;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "Stored value is corrupt, using default");
                default
            }
        }
    }

    /// Serialize `value` as JSON and write it under `key`.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when serialization or the underlying write fails.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_owned(),
            source,
        })?;
        self.store.set(key, &raw)?;
        debug!(key, bytes = raw.len(), "Saved value");
        Ok(())
    }
}
