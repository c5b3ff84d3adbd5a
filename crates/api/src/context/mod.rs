//! Application context - dependency injection container

use std::path::Path;
use std::sync::Arc;

use roster_core::{
    KeyValueStore, ListViewController, ProfileEditController, UserCollectionService,
};
use roster_domain::{Config, Result};
use roster_infra::{FileKeyValueStore, MemoryKeyValueStore};
use tracing::{info, warn};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub store: Arc<dyn KeyValueStore>,
    pub users: Arc<UserCollectionService>,
}

impl AppContext {
    /// Build a context over the file store named by `config`
    ///
    /// # Errors
    /// Returns an error if the storage directory cannot be opened.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let store =
            FileKeyValueStore::open(Path::new(&config.storage.dir), config.storage.quota_bytes)?;
        info!(path = %store.path().display(), "using file storage");
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Build a context over volatile in-process storage
    pub fn in_memory(config: Config) -> Self {
        let store = MemoryKeyValueStore::new(config.storage.quota_bytes);
        info!("using in-memory storage");
        Self::with_store(config, Arc::new(store))
    }

    /// Wire the services over `store` and seed it if empty
    pub fn with_store(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        let users = Arc::new(UserCollectionService::new(Arc::clone(&store)));

        let seeded = users.ensure_seeded();
        if let Some(err) = &seeded.write_error {
            warn!(error = %err, "seed set could not be persisted");
        } else if seeded.value {
            info!("installed seed users");
        }

        Self { config, store, users }
    }

    /// Controller for the directory page
    pub fn list_view(&self) -> ListViewController {
        ListViewController::new(Arc::clone(&self.users), self.config.ui.clone())
    }

    /// Controller for a profile page
    pub fn profile_view(&self) -> ProfileEditController {
        ProfileEditController::new(Arc::clone(&self.users), self.config.ui.clone())
    }
}
