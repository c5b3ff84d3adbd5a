use std::sync::Arc;

use roster_domain::constants::USERS_STORAGE_KEY;
use roster_domain::{seed_users, Result, RosterError, UserRecord};
use tracing::{debug, info, warn};

use super::ports::KeyValueStore;

/// Reads and writes the whole user collection under one fixed key
pub struct UserStore {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
}

impl UserStore {
    /// Adapter over `store` using the standard collection key.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store, key: USERS_STORAGE_KEY }
    }

    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Load the stored collection.
    ///
    /// Returns `None` when there is nothing usable under the key: the key is
    /// missing, the read fails, the value is not JSON, or the JSON is not an
    /// array. Callers treat `None` as "needs seeding". A stored empty array is
    /// `Some(vec![])`.
    ///
    /// Any array is kept. Records read leniently; elements that are not
    /// objects are skipped and vanish on the next write.
    pub fn load(&self) -> Option<Vec<UserRecord>> {
        let raw = match self.store.get_item(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = self.key, "no stored user collection");
                return None;
            }
            Err(err) => {
                warn!(key = self.key, error = %err, "failed to read user collection; treating as absent");
                return None;
            }
        };

        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key = self.key, error = %err, "stored user collection is not valid JSON");
                return None;
            }
        };

        let serde_json::Value::Array(items) = value else {
            warn!(key = self.key, "stored user collection is not an array");
            return None;
        };

        let stored = items.len();
        let users: Vec<UserRecord> = items
            .into_iter()
            .filter(serde_json::Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect();
        if users.len() < stored {
            warn!(
                key = self.key,
                skipped = stored - users.len(),
                "stored user collection has elements that are not records"
            );
        }
        Some(users)
    }

    /// Serialize and write the whole collection.
    ///
    /// # Errors
    /// `RosterError::StorageWrite` when the store rejects the write. The
    /// failure is logged here; callers decide how to tell the user.
    pub fn save(&self, users: &[UserRecord]) -> Result<()> {
        let raw = serde_json::to_string(users)?;

        self.store.set_item(self.key, &raw).map_err(|err| {
            warn!(key = self.key, count = users.len(), error = %err, "failed to write user collection");
            match err {
                RosterError::StorageWrite(message) => RosterError::StorageWrite(message),
                other => RosterError::StorageWrite(other.to_string()),
            }
        })?;

        debug!(key = self.key, count = users.len(), bytes = raw.len(), "user collection written");
        Ok(())
    }

    /// Stored collection, or the seed set installed in its place.
    ///
    /// The second element carries the write error when installing the seed
    /// set failed; the seed set is returned either way.
    pub fn load_or_seed(&self) -> (Vec<UserRecord>, Option<RosterError>) {
        if let Some(users) = self.load() {
            return (users, None);
        }

        let seed = seed_users();
        info!(key = self.key, count = seed.len(), "installing seed user collection");
        let write_error = self.save(&seed).err();
        (seed, write_error)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use parking_lot::Mutex;

    use super::*;

    #[derive(Default)]
    struct MapStore {
        items: Mutex<HashMap<String, String>>,
        reject_writes: bool,
    }

    impl KeyValueStore for MapStore {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            Ok(self.items.lock().get(key).cloned())
        }

        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            if self.reject_writes {
                return Err(RosterError::StorageWrite("quota exceeded".into()));
            }
            self.items.lock().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove_item(&self, key: &str) -> Result<()> {
            self.items.lock().remove(key);
            Ok(())
        }
    }

    fn store_with(raw: &str) -> (Arc<MapStore>, UserStore) {
        let backing = Arc::new(MapStore::default());
        backing.set_item(USERS_STORAGE_KEY, raw).unwrap();
        let store = UserStore::new(backing.clone());
        (backing, store)
    }

    #[test]
    fn missing_key_is_absent() {
        let store = UserStore::new(Arc::new(MapStore::default()));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn garbage_is_absent() {
        let (_, store) = store_with("{not json");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn non_array_is_absent() {
        let (_, store) = store_with(r#"{"id":"1"}"#);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn non_record_elements_are_skipped() {
        let (_, store) = store_with(r#"[{"id":"1"}, 42, null, {"id":"2"}]"#);
        let ids: Vec<_> = store.load().unwrap().into_iter().map(|user| user.id).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn null_and_wrong_typed_fields_keep_the_collection() {
        let (backing, store) = store_with(
            r#"[{"id":"42","firstName":"Keep","email":"k@x.io","phone":null,"pincode":560001}]"#,
        );

        let (users, err) = store.load_or_seed();
        assert!(err.is_none());
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, "42");
        assert_eq!(users[0].phone, "");
        assert_eq!(users[0].pincode, "560001");

        let raw = backing.get_item(USERS_STORAGE_KEY).unwrap().unwrap();
        assert!(raw.contains(r#""firstName":"Keep""#));
    }

    #[test]
    fn empty_array_is_present() {
        let (_, store) = store_with("[]");
        assert_eq!(store.load(), Some(Vec::new()));
        let (users, err) = store.load_or_seed();
        assert!(users.is_empty());
        assert!(err.is_none());
    }

    #[test]
    fn save_then_load_is_stable() {
        let store = UserStore::new(Arc::new(MapStore::default()));
        store.save(&seed_users()).unwrap();
        let first = store.load().unwrap();
        store.save(&first).unwrap();
        assert_eq!(store.load().unwrap(), first);
    }

    #[test]
    fn load_or_seed_installs_seed_set() {
        let backing = Arc::new(MapStore::default());
        let store = UserStore::new(backing.clone());
        let (users, err) = store.load_or_seed();
        assert_eq!(users, seed_users());
        assert!(err.is_none());
        assert!(backing.get_item(USERS_STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn rejected_write_is_reported() {
        let store =
            UserStore::new(Arc::new(MapStore { reject_writes: true, ..MapStore::default() }));
        let err = store.save(&seed_users()).unwrap_err();
        assert!(err.is_write_failure());

        let (users, err) = store.load_or_seed();
        assert_eq!(users.len(), 3);
        assert!(err.is_some_and(|e| e.is_write_failure()));
    }
}
