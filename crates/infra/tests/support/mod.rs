//! Shared helpers for `roster-infra` integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use roster_core::UserCollectionService;
use roster_infra::FileKeyValueStore;
use tempfile::TempDir;

/// A file store in a fresh scratch directory. Keep the `TempDir` alive for
/// the duration of the test.
pub fn scratch_store(quota_bytes: Option<usize>) -> (TempDir, Arc<FileKeyValueStore>) {
    let dir = TempDir::new().expect("scratch dir");
    let store = FileKeyValueStore::open(dir.path(), quota_bytes).expect("open store");
    (dir, Arc::new(store))
}

pub fn service_over(store: &Arc<FileKeyValueStore>) -> UserCollectionService {
    UserCollectionService::new(Arc::clone(store) as Arc<dyn roster_core::KeyValueStore>)
}
