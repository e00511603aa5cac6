use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Result, StoreError};
use crate::{KeyValueStore, validate_key};

/// Process-local store; values vanish when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    ///
    /// # Errors
    /// Returns [`StoreError::LockError`] if the lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self.values.lock().map_err(|_| StoreError::LockError)?.len())
    }

    /// Whether nothing has been stored yet.
    ///
    /// # Errors
    /// Returns [`StoreError::LockError`] if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let values = self.values.lock().map_err(|_| StoreError::LockError)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        let mut values = self.values.lock().map_err(|_| StoreError::LockError)?;
        values.insert(key.to_owned(), value.to_owned());
        drop(values);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        let mut values = self.values.lock().map_err(|_| StoreError::LockError)?;
        values.remove(key);
        drop(values);
        Ok(())
    }
}
