//! # Roster Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (key-value storage, id allocation, user confirmation)
//! - The store adapter and the user collection service
//! - View controllers for the directory list, the add-user panel and the
//!   profile editor
//!
//! ## Architecture Principles
//! - Only depends on `roster-common` and `roster-domain`
//! - No file system or platform code
//! - All external dependencies via traits
//! - The collection service is the only writer to the store adapter

pub mod storage;
pub mod user;
pub mod views;

// Re-export specific items to avoid ambiguity
pub use storage::ports::KeyValueStore;
pub use storage::UserStore;
pub use user::ports::{IdSource, TimestampIdSource};
pub use user::{Committed, UserCollectionService};
pub use views::add_user::AddUserFlow;
pub use views::list::{DeleteOutcome, ListState, ListViewController, UserRow};
pub use views::notice::Notice;
pub use views::ports::Confirmation;
pub use views::profile::{
    EditTransition, ProfileEditController, ProfileHeader, ProfileSession, ProfileState,
    RecoveryAction,
};
