//! View controllers
//!
//! Each controller holds the state one page needs and turns user actions into
//! collection-service calls. Rendering is left to the front-end; controllers
//! only expose state and view-model rows.
//!
//! - [`list`]: the directory page (`loading -> ready | error`)
//! - [`add_user`]: the add-user side panel
//! - [`profile`]: the tabbed per-user profile editor

pub mod add_user;
pub mod list;
pub mod notice;
pub mod ports;
pub mod profile;
