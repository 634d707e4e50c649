//! In-memory key/value storage.
//!
//! Used in tests, and by the plugin when the preferences file cannot be
//! opened: preferences then last only for the current session.

use crate::domain::error::Result;
use crate::storage::backend::KeyValueStore;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
