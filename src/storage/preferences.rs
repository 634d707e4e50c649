//! Persistence of the last-used search term and sort order.
//!
//! Two independent string entries under fixed keys, read once at startup and
//! written after every filter/sort pass.

use crate::domain::error::Result;
use crate::domain::view::{SortOrder, ViewState};
use crate::storage::backend::KeyValueStore;

/// Key holding the raw search text.
pub const FILTER_KEY: &str = "country_filter";

/// Key holding the sort order token (`"asc"` or `"desc"`).
pub const ORDER_KEY: &str = "country_order";

/// Saves and restores a [`ViewState`] through any [`KeyValueStore`].
pub struct PreferenceStore {
    backend: Box<dyn KeyValueStore>,
}

impl PreferenceStore {
    #[must_use]
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Writes the term (untrimmed) and the order token.
    ///
    /// # Errors
    ///
    /// Returns an error if either entry cannot be persisted.
    pub fn save(&mut self, view: &ViewState) -> Result<()> {
        self.backend.set(FILTER_KEY, &view.search_term)?;
        self.backend.set(ORDER_KEY, view.sort_order.as_token())?;
        tracing::debug!(
            term_len = view.search_term.len(),
            order = view.sort_order.as_token(),
            "preferences saved"
        );
        Ok(())
    }

    /// Reads the saved view, defaulting each missing or unreadable entry
    /// independently to `""` and descending.
    #[must_use]
    pub fn load(&self) -> ViewState {
        let search_term = self.read(FILTER_KEY).unwrap_or_default();
        let sort_order = self
            .read(ORDER_KEY)
            .map_or(SortOrder::default(), |token| SortOrder::from_token(&token));

        tracing::debug!(
            term_len = search_term.len(),
            order = sort_order.as_token(),
            "preferences restored"
        );

        ViewState {
            search_term,
            sort_order,
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        self.backend.get(key).unwrap_or_else(|e| {
            tracing::warn!(key = %key, error = %e, "failed to read preference, using default");
            None
        })
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonStorage, MemoryStorage};
    use tempfile::TempDir;

    #[test]
    fn empty_store_loads_defaults() {
        let store = PreferenceStore::new(Box::new(MemoryStorage::new()));
        assert_eq!(store.load(), ViewState::default());
    }

    #[test]
    fn save_then_load_round_trips_raw_term() {
        let mut store = PreferenceStore::new(Box::new(MemoryStorage::new()));

        let view = ViewState::new("  chi ", SortOrder::Ascending);
        store.save(&view).unwrap();
        assert_eq!(store.load(), view);

        let empty = ViewState::new("", SortOrder::Descending);
        store.save(&empty).unwrap();
        assert_eq!(store.load(), empty);
    }

    #[test]
    fn entries_default_independently() {
        let mut backend = MemoryStorage::new();
        backend.set(ORDER_KEY, "asc").unwrap();

        let store = PreferenceStore::new(Box::new(backend));
        assert_eq!(store.load(), ViewState::new("", SortOrder::Ascending));
    }

    #[test]
    fn survives_reopen_through_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");

        let mut store = PreferenceStore::new(Box::new(JsonStorage::new(path.clone()).unwrap()));
        store.save(&ViewState::new("bra", SortOrder::Ascending)).unwrap();
        drop(store);

        let reopened = PreferenceStore::new(Box::new(JsonStorage::new(path).unwrap()));
        assert_eq!(reopened.load(), ViewState::new("bra", SortOrder::Ascending));
    }
}
