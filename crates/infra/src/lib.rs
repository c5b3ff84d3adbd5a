//! # Roster Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Key-value storage back-ends (JSON file, in-memory)
//! - Configuration loading from the environment and config files
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `roster-core`
//! - Depends on `roster-domain` and `roster-core`
//! - Contains all "impure" code (file system, process environment)

pub mod config;
pub mod errors;
pub mod observability;
pub mod storage;

// Re-export commonly used items
pub use errors::InfraError;
pub use observability::init_tracing;
pub use storage::{FileKeyValueStore, MemoryKeyValueStore};
