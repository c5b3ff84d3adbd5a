//! In-process key-value store

use std::collections::HashMap;

use parking_lot::Mutex;
use roster_core::KeyValueStore;
use roster_domain::Result;

use super::check_quota;

/// Volatile store for tests and `--ephemeral` runs
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    items: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryKeyValueStore {
    pub fn new(quota_bytes: Option<usize>) -> Self {
        Self { items: Mutex::new(HashMap::new()), quota_bytes }
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock();
        check_quota(&items, key, value, self.quota_bytes)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.lock().remove(key);
        Ok(())
    }
}
