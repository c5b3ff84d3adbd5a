//! File-backed key-value store
//!
//! All keys live in one JSON object file, `local_storage.json`, under the
//! storage directory. Every read goes to disk so that edits from another
//! process are picked up; writes replace the file through a sibling temp
//! file and a rename.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use roster_core::KeyValueStore;
use roster_domain::constants::LOCAL_STORAGE_FILE;
use roster_domain::{Result, RosterError};
use tracing::{debug, warn};

use super::check_quota;
use crate::errors::InfraError;

/// Persistent store rooted at a directory
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    quota_bytes: Option<usize>,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Open (creating the directory if needed) the store under `dir`.
    ///
    /// # Errors
    /// `RosterError::Storage` if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>, quota_bytes: Option<usize>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(InfraError::from)?;
        let path = dir.join(LOCAL_STORAGE_FILE);
        debug!(path = %path.display(), ?quota_bytes, "opened file storage");
        Ok(Self { path, quota_bytes, write_lock: Mutex::new(()) })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<HashMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(err) => return Err(InfraError::from(err).into()),
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "storage file is corrupt; reading as empty");
                Ok(HashMap::new())
            }
        }
    }

    fn write_items(&self, items: &HashMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        let tmp = self.path.with_extension("json.tmp");

        fs::write(&tmp, raw.as_bytes())
            .and_then(|()| fs::rename(&tmp, &self.path))
            .map_err(|err| {
                let _ = fs::remove_file(&tmp);
                RosterError::StorageWrite(format!("failed to write {}: {err}", self.path.display()))
            })
    }

    fn modify(
        &self,
        key: &str,
        change: impl FnOnce(&mut HashMap<String, String>) -> Result<()>,
    ) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut items = self.read_items().map_err(|err| match err {
            RosterError::StorageWrite(message) => RosterError::StorageWrite(message),
            other => RosterError::StorageWrite(other.to_string()),
        })?;
        change(&mut items)?;
        self.write_items(&items)?;
        debug!(key, keys = items.len(), "storage file updated");
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_items()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let quota = self.quota_bytes;
        self.modify(key, |items| {
            check_quota(items, key, value, quota)?;
            items.insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.modify(key, |items| {
            items.remove(key);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::open(dir.path(), None).unwrap();
        store.set_item("um_users_v1", "[]").unwrap();
        drop(store);

        let reopened = FileKeyValueStore::open(dir.path(), None).unwrap();
        assert_eq!(reopened.get_item("um_users_v1").unwrap().as_deref(), Some("[]"));
        assert!(!dir.path().join("local_storage.json.tmp").exists());
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::open(dir.path().join("nested"), None).unwrap();
        assert_eq!(store.get_item("anything").unwrap(), None);
    }

    #[test]
    fn corrupt_file_reads_as_empty_and_is_replaced_on_write() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(LOCAL_STORAGE_FILE), "{{{{").unwrap();
        let store = FileKeyValueStore::open(dir.path(), None).unwrap();

        assert_eq!(store.get_item("k").unwrap(), None);
        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn quota_rejects_oversized_write() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::open(dir.path(), Some(10)).unwrap();
        store.set_item("k", "ok").unwrap();

        let err = store.set_item("k", "far too large for the quota").unwrap_err();
        assert!(err.is_write_failure());
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("ok"));
    }

    #[test]
    fn remove_deletes_only_that_key() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::open(dir.path(), None).unwrap();
        store.set_item("a", "1").unwrap();
        store.set_item("b", "2").unwrap();

        store.remove_item("a").unwrap();
        assert_eq!(store.get_item("a").unwrap(), None);
        assert_eq!(store.get_item("b").unwrap().as_deref(), Some("2"));
    }
}
