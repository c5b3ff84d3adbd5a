//! User collection service - core business logic

use std::sync::Arc;

use roster_domain::{Result, RosterError, UserPatch, UserRecord};
use tracing::{debug, info, warn};

use super::ports::{IdSource, TimestampIdSource};
use super::Committed;
use crate::storage::ports::KeyValueStore;
use crate::storage::UserStore;

/// Attempts at finding an id not already in the collection.
const MAX_ID_ATTEMPTS: usize = 64;

/// In-memory view over the persisted user collection
///
/// Every mutation reads the whole collection, applies one change and writes
/// the whole collection back. There are no partial writes and no
/// transactions; concurrent writers from other processes race with
/// last-write-wins.
pub struct UserCollectionService {
    store: UserStore,
    ids: Arc<dyn IdSource>,
}

impl UserCollectionService {
    /// Create a service over `store` with timestamp ids
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store: UserStore::new(store), ids: Arc::new(TimestampIdSource::new()) }
    }

    /// Replace the id source
    pub fn with_id_source(mut self, ids: Arc<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    /// Install the seed set if the store holds no collection.
    ///
    /// Returns whether seeding happened.
    pub fn ensure_seeded(&self) -> Committed<bool> {
        if self.store.load().is_some() {
            return Committed::persisted(false);
        }
        let (_, write_error) = self.store.load_or_seed();
        Committed { value: true, write_error }
    }

    /// The stored collection; the seed set (persisted as a side effect) when
    /// the store is empty.
    pub fn list_all(&self) -> Committed<Vec<UserRecord>> {
        let (users, write_error) = self.store.load_or_seed();
        debug!(count = users.len(), "listed users");
        Committed { value: users, write_error }
    }

    /// Look up a record by id without seeding.
    pub fn find_by_id(&self, id: &str) -> Option<UserRecord> {
        self.store.load().unwrap_or_default().into_iter().find(|user| user.id == id)
    }

    /// Append a new record built from `patch` under a fresh id.
    ///
    /// Keys the patch lacks (including both sub-entry lists) start empty.
    ///
    /// # Errors
    /// `RosterError::Internal` if no unused id could be allocated or the
    /// collection cannot be serialized.
    pub fn insert(&self, patch: UserPatch) -> Result<Committed<UserRecord>> {
        let (mut users, _) = self.store.load_or_seed();
        let id = self.allocate_id(&users)?;
        let record = patch.into_record(id);
        users.push(record.clone());

        info!(user_id = %record.id, count = users.len(), "user inserted");
        self.write(&users, record)
    }

    /// Remove the record with `id`. Returns whether one was removed; nothing
    /// is written when it was absent.
    ///
    /// # Errors
    /// `RosterError::Internal` if the collection cannot be serialized.
    pub fn delete_by_id(&self, id: &str) -> Result<Committed<bool>> {
        let (mut users, _) = self.store.load_or_seed();
        let Some(position) = users.iter().position(|user| user.id == id) else {
            debug!(user_id = id, "delete skipped; no such user");
            return Ok(Committed::persisted(false));
        };
        users.remove(position);

        info!(user_id = id, count = users.len(), "user deleted");
        self.write(&users, true)
    }

    /// Shallow-merge `patch` onto the record with `id`.
    ///
    /// Returns the merged record, or `None` (and writes nothing) when no
    /// record has that id.
    ///
    /// # Errors
    /// `RosterError::Internal` if the collection cannot be serialized.
    pub fn patch_by_id(&self, id: &str, patch: &UserPatch) -> Result<Committed<Option<UserRecord>>> {
        let (mut users, _) = self.store.load_or_seed();
        let Some(record) = users.iter_mut().find(|user| user.id == id) else {
            debug!(user_id = id, "patch skipped; no such user");
            return Ok(Committed::persisted(None));
        };
        patch.apply_to(record);
        let merged = record.clone();

        info!(user_id = id, "user patched");
        self.write(&users, Some(merged))
    }

    fn allocate_id(&self, users: &[UserRecord]) -> Result<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id();
            if !users.iter().any(|user| user.id == candidate) {
                return Ok(candidate);
            }
            debug!(candidate = %candidate, "id already taken; drawing another");
        }
        Err(RosterError::Internal(format!(
            "could not allocate an unused user id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }

    fn write<T>(&self, users: &[UserRecord], value: T) -> Result<Committed<T>> {
        match self.store.save(users) {
            Ok(()) => Ok(Committed::persisted(value)),
            Err(err) if err.is_write_failure() => {
                warn!(error = %err, "collection change kept in memory only");
                Ok(Committed::unpersisted(value, err))
            }
            Err(err) => Err(err),
        }
    }
}
