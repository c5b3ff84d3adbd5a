//! # Roster Domain
//!
//! Business domain types and models for Roster.
//!
//! This crate contains:
//! - User record types and their partial (patch) forms
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and the seed set
//!
//! ## Architecture
//! - No dependencies on other Roster crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod seed;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use seed::seed_users;
pub use types::*;
