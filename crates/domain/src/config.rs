//! Configuration management

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ADD_USER_DELAY_MS, DEFAULT_STORAGE_DIR, DEFAULT_STORAGE_QUOTA_BYTES, LIST_LOAD_DELAY_MS,
    PROFILE_LOAD_DELAY_MS,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Key-value storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the local storage file.
    pub dir: String,
    /// Total bytes of keys and values the store accepts. `None` disables the
    /// limit.
    pub quota_bytes: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { dir: DEFAULT_STORAGE_DIR.to_string(), quota_bytes: Some(DEFAULT_STORAGE_QUOTA_BYTES) }
    }
}

/// Artificial latencies standing in for a future network fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub list_load_delay_ms: u64,
    pub add_user_delay_ms: u64,
    pub profile_load_delay_ms: u64,
}

impl UiConfig {
    /// No artificial latency at all. Used by tests.
    pub const fn immediate() -> Self {
        Self { list_load_delay_ms: 0, add_user_delay_ms: 0, profile_load_delay_ms: 0 }
    }

    pub const fn list_load_delay(&self) -> Duration {
        Duration::from_millis(self.list_load_delay_ms)
    }

    pub const fn add_user_delay(&self) -> Duration {
        Duration::from_millis(self.add_user_delay_ms)
    }

    pub const fn profile_load_delay(&self) -> Duration {
        Duration::from_millis(self.profile_load_delay_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            list_load_delay_ms: LIST_LOAD_DELAY_MS,
            add_user_delay_ms: ADD_USER_DELAY_MS,
            profile_load_delay_ms: PROFILE_LOAD_DELAY_MS,
        }
    }
}

/// Log output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}
