//! Key/value storage abstraction.
//!
//! [`KeyValueStore`] stores raw strings under string keys, like a browser's
//! local storage. Encoding of richer values is the caller's concern.

use crate::domain::error::Result;

/// Synchronous string key/value store.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes
/// - [`MemoryStorage`](crate::storage::MemoryStorage): process-local map
pub trait KeyValueStore: Send {
    /// Reads the value stored under `key`, `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
