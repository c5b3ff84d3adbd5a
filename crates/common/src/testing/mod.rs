//! Testing utilities and helpers
//!
//! - **[`temp`]**: Temporary file/directory helpers
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "test-utils")]
//! # {
//! use roster_common::testing::TempDir;
//!
//! let dir = TempDir::new("roster-doc").unwrap();
//! let file = dir.create_file("local_storage.json", "{}").unwrap();
//! assert!(file.exists());
//! # }
//! ```

pub mod temp;

pub use temp::TempDir;
