//! JSON file-based key/value storage.
//!
//! The whole map is held in memory and rewritten on every change using a
//! write-to-temp + rename, so the file on disk is never half-written.

use crate::domain::error::{CountryDeckError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk container format.
///
/// ```json
/// {
///   "version": 1,
///   "updated_at": "2026-10-19T12:00:00+00:00",
///   "entries": {
///     "country_filter": "bra",
///     "country_order": "desc"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the file layout.
    #[serde(default = "current_version")]
    version: u32,

    /// RFC 3339 time of the last write, absent for a fresh store.
    #[serde(default)]
    updated_at: Option<String>,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

const fn current_version() -> u32 {
    1
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: current_version(),
            updated_at: None,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// `Send` but not `Sync`; it is owned by the plugin's single event thread.
pub struct JsonStorage {
    file_path: PathBuf,
    data: StorageData,
}

impl JsonStorage {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// A missing file yields an empty store; the file is only created on the
    /// first write. A file that cannot be parsed is treated the same way and
    /// is overwritten by the next write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, or the file
    /// exists but cannot be read.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no existing file, starting empty");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "storage opened");

        Ok(Self { file_path, data })
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = match serde_json::from_str(&contents) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "unreadable storage file, starting empty");
                return Ok(StorageData::default());
            }
        };

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            updated_at = ?data.updated_at,
            "loaded storage data"
        );

        Ok(data)
    }

    fn save_to_file(&mut self) -> Result<()> {
        self.data.updated_at = Some(chrono::Utc::now().to_rfc3339());

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| CountryDeckError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::trace!(path = ?self.file_path, "storage saved");
        Ok(())
    }
}

impl KeyValueStore for JsonStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key = %key).entered();

        if self.data.entries.get(key).map(String::as_str) == Some(value) && self.file_path.exists() {
            tracing::trace!("value unchanged, skipping write");
            return Ok(());
        }

        self.data.entries.insert(key.to_string(), value.to_string());
        self.save_to_file()
    }
}

impl std::fmt::Debug for JsonStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonStorage")
            .field("file_path", &self.file_path)
            .field("entries", &self.data.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = JsonStorage::new(path.clone()).unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        store.set("empty", "").unwrap();
        drop(store);

        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(reopened.get("empty").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn writes_leave_no_temp_file_and_stamp_update_time() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = JsonStorage::new(path.clone()).unwrap();
        store.set("k", "v").unwrap();

        assert!(!path.with_extension("tmp").exists());
        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], 1);
        assert!(raw["updated_at"].is_string());
        assert_eq!(raw["entries"]["k"], "v");
    }

    #[test]
    fn corrupt_file_starts_empty_and_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = JsonStorage::new(path.clone()).unwrap();
        assert_eq!(store.get("country_filter").unwrap(), None);

        store.set("country_filter", "bra").unwrap();
        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.get("country_filter").unwrap().as_deref(), Some("bra"));
    }

    #[test]
    fn file_without_version_is_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(
            &path,
            r#"{"entries":{"country_filter":"bra","country_order":"asc"}}"#,
        )
        .unwrap();

        let store = JsonStorage::new(path).unwrap();
        assert_eq!(store.get("country_filter").unwrap().as_deref(), Some("bra"));
        assert_eq!(store.get("country_order").unwrap().as_deref(), Some("asc"));
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::create_dir(&path).unwrap();

        let err = JsonStorage::new(path).unwrap_err();
        assert!(matches!(err, CountryDeckError::Io(_)));
    }
}
