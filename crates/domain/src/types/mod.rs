//! Domain types
//!
//! - [`user`]: stored user records and their sub-entries
//! - [`patch`]: partial records used for inserts and merges
//! - [`fields`]: name-addressed form fields and profile tabs

pub mod fields;
mod lenient;
pub mod patch;
pub mod user;

pub use fields::{AddUserField, EducationField, ExperienceField, ProfileField, Tab};
pub use patch::{NewUser, UserPatch};
pub use user::{EducationEntry, ExperienceEntry, UserRecord};
