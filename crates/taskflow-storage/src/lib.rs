//! Durable key-value storage for taskflow.
//!
//! [`KeyValueStore`] is the raw string boundary; [`StoreAdapter`] layers JSON
//! (de)serialization on top and never fails on load.

mod adapter;
mod error;
mod file;
mod memory;

pub use adapter::StoreAdapter;
pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Synchronous string store scoped to one user profile.
///
/// Each `set` is atomic for its key; there is no cross-key transaction.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` if present.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the value exists but cannot be removed.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for &K {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for Box<K> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Validate a key for use as a file stem.
///
/// # Errors
/// Returns [`StoreError::InvalidKey`] for empty keys, keys starting with `.`,
/// or keys containing anything other than ASCII alphanumerics, `-`, `_` and `.`.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_owned()))
    }
}
