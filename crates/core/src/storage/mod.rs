//! Persistent store adapter
//!
//! [`UserStore`] is the only code that knows the collection's storage key and
//! serialized form. It sits on top of a [`ports::KeyValueStore`].

mod adapter;
pub mod ports;

pub use adapter::UserStore;
