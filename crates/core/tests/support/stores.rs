//! Mock storage and id ports

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use roster_core::{IdSource, KeyValueStore};
use roster_domain::{Result as DomainResult, RosterError};

/// In-memory mock for `KeyValueStore`.
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// the service wrote.
#[derive(Default, Clone)]
pub struct MockKeyValueStore {
    items: Arc<Mutex<HashMap<String, String>>>,
    reject_writes: Arc<AtomicBool>,
    panic_on_read: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl MockKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate `key` with a raw string.
    pub fn with_raw(self, key: &str, value: &str) -> Self {
        self.items.lock().insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent `set_item` fail like a full quota.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Make every subsequent `get_item` panic.
    pub fn panic_on_read(&self, panic: bool) {
        self.panic_on_read.store(panic, Ordering::SeqCst);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.lock().get(key).cloned()
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MockKeyValueStore {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        assert!(!self.panic_on_read.load(Ordering::SeqCst), "storage read exploded");
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(RosterError::StorageWrite("quota exceeded".into()));
        }
        self.items.lock().insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> DomainResult<()> {
        self.items.lock().remove(key);
        Ok(())
    }
}

/// Deterministic `IdSource` yielding consecutive integers.
pub struct SequentialIdSource {
    next: AtomicU64,
}

impl SequentialIdSource {
    pub fn starting_at(first: u64) -> Self {
        Self { next: AtomicU64::new(first) }
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::SeqCst).to_string()
    }
}
