//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Roster
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RosterError {
    /// Reading from the key-value store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Writing to the key-value store failed; the change may not persist.
    #[error("Storage write failed: {0}")]
    StorageWrite(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Required form fields are missing.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RosterError {
    /// Whether the error means a change was applied in memory but may not
    /// have reached the store.
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::StorageWrite(_))
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization failed: {err}"))
    }
}

/// Result type alias for Roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
