//! Port interfaces for persistent storage
//!
//! The store is modelled on browser local storage: string keys mapping to
//! string values, read and written synchronously.

use roster_domain::Result;

/// Trait for a persistent string key-value store
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`; `None` when the key was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    ///
    /// Implementations report a rejected write (quota, I/O) as
    /// `RosterError::StorageWrite`.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
