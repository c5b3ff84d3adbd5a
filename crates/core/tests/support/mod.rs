//! Shared test helpers for `roster-core` integration tests.
//!
//! In-memory storage with failure injection and a deterministic id source,
//! so the scenarios can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod stores;

use std::sync::Arc;

use roster_core::UserCollectionService;
use roster_domain::UiConfig;
pub use stores::{MockKeyValueStore, SequentialIdSource};

/// A service over `store` with ids "100", "101", ...
pub fn service_over(store: &MockKeyValueStore) -> Arc<UserCollectionService> {
    Arc::new(
        UserCollectionService::new(Arc::new(store.clone()))
            .with_id_source(Arc::new(SequentialIdSource::starting_at(100))),
    )
}

/// Controller timing with every simulated delay disabled.
pub const fn instant_ui() -> UiConfig {
    UiConfig::immediate()
}
