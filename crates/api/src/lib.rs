//! # Roster App
//!
//! Application layer - context and the interactive front-end.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Route parsing and the line-oriented shell
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Provides the `roster` binary

pub mod context;
pub mod repl;
pub mod routing;
pub mod utils;

// Re-export for convenience
pub use context::*;
pub use routing::Route;
