//! Key-value storage back-ends
//!
//! Both stores implement `roster_core::KeyValueStore` with the browser's
//! local-storage rules: string keys and values, and an optional byte quota
//! over the total size of all keys and values.

pub mod file_store;
pub mod memory_store;

use std::collections::HashMap;

use roster_domain::{Result, RosterError};

pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;

/// Bytes used by `items` once `key` holds `value`.
fn projected_usage(items: &HashMap<String, String>, key: &str, value: &str) -> usize {
    let others: usize = items
        .iter()
        .filter(|(existing, _)| existing.as_str() != key)
        .map(|(existing, stored)| existing.len() + stored.len())
        .sum();
    others + key.len() + value.len()
}

/// Reject a write that would push usage past `quota`.
fn check_quota(
    items: &HashMap<String, String>,
    key: &str,
    value: &str,
    quota: Option<usize>,
) -> Result<()> {
    let Some(limit) = quota else {
        return Ok(());
    };
    let needed = projected_usage(items, key, value);
    if needed > limit {
        tracing::warn!(key, needed, limit, "storage quota exceeded");
        return Err(RosterError::StorageWrite(format!(
            "quota exceeded: {needed} bytes needed, {limit} allowed"
        )));
    }
    Ok(())
}
