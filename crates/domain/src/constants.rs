//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Storage
pub const USERS_STORAGE_KEY: &str = "um_users_v1";
pub const LOCAL_STORAGE_FILE: &str = "local_storage.json";
pub const DEFAULT_STORAGE_DIR: &str = ".roster";
/// Browser local storage budget per origin.
pub const DEFAULT_STORAGE_QUOTA_BYTES: usize = 5 * 1024 * 1024;

// Simulated fetch latency
pub const LIST_LOAD_DELAY_MS: u64 = 300;
pub const ADD_USER_DELAY_MS: u64 = 500;
pub const PROFILE_LOAD_DELAY_MS: u64 = 200;

// User-facing messages
pub const LOAD_USERS_FAILED_MESSAGE: &str = "Failed to load users";
pub const ADD_USER_REQUIRED_MESSAGE: &str = "Please provide name and email";
pub const DELETE_CONFIRM_PROMPT: &str = "Delete this user?";
pub const SAVED_MESSAGE: &str = "Saved";
pub const WRITE_FAILED_MESSAGE: &str = "Changes could not be written to storage and may not persist";
pub const EMPTY_EMAIL_PLACEHOLDER: &str = "-";
