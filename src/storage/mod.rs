pub mod json_backend;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Well-known key holding the most recent successful prediction.
pub const PREDICTION_KEY: &str = "salaryPrediction";

/// Session-scoped key-value slot shared across screen navigations.
///
/// Only the submission coordinator writes and only the result presenter reads.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Store that lives for the duration of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries().clear();
        Ok(())
    }
}

pub use json_backend::JsonFileStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_and_clears() {
        let store = MemoryStore::new();
        assert_eq!(store.get(PREDICTION_KEY).unwrap(), None);
        store.set(PREDICTION_KEY, "first").unwrap();
        store.set(PREDICTION_KEY, "second").unwrap();
        assert_eq!(store.get(PREDICTION_KEY).unwrap().as_deref(), Some("second"));
        store.clear().unwrap();
        assert_eq!(store.get(PREDICTION_KEY).unwrap(), None);
    }
}
