#![allow(dead_code)]

use std::sync::Arc;

use roster_common::testing::TempDir;
use roster_domain::{Config, StorageConfig, UiConfig};
use roster_lib::AppContext;

/// Config with no artificial latency.
pub fn instant_config() -> Config {
    Config { ui: UiConfig::immediate(), ..Config::default() }
}

/// Context over volatile storage, already seeded.
pub fn memory_context() -> Arc<AppContext> {
    Arc::new(AppContext::in_memory(instant_config()))
}

/// Context over a file store in a fresh scratch directory.
///
/// Returns the temp dir too so it stays alive for the test.
pub fn file_context() -> (Arc<AppContext>, TempDir) {
    let temp_dir = TempDir::new("roster-app-test").expect("failed to create temporary directory");
    let config = Config {
        storage: StorageConfig {
            dir: temp_dir.path().to_string_lossy().into_owned(),
            ..StorageConfig::default()
        },
        ..instant_config()
    };
    let ctx = AppContext::new_with_config(config).expect("failed to create test context");
    (Arc::new(ctx), temp_dir)
}
