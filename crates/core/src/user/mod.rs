//! User collection management
//!
//! [`UserCollectionService`] owns the [`UserStore`](crate::storage::UserStore)
//! and is the single path through which view controllers read or change the
//! persisted collection.

pub mod ports;
mod service;

use roster_domain::RosterError;
pub use service::UserCollectionService;

/// Result of an operation that rewrote the collection
///
/// `value` reflects the change as applied in memory. `write_error` is set when
/// the store refused the rewrite, in which case the change may be gone on the
/// next read.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Committed<T> {
    pub value: T,
    pub write_error: Option<RosterError>,
}

impl<T> Committed<T> {
    /// Value that reached the store (or needed no write).
    pub const fn persisted(value: T) -> Self {
        Self { value, write_error: None }
    }

    /// Value whose write was rejected.
    pub const fn unpersisted(value: T, error: RosterError) -> Self {
        Self { value, write_error: Some(error) }
    }

    pub const fn is_persisted(&self) -> bool {
        self.write_error.is_none()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Committed<U> {
        Committed { value: f(self.value), write_error: self.write_error }
    }

    /// Treat a rejected write as an error.
    ///
    /// # Errors
    /// The write error, if any.
    pub fn into_result(self) -> Result<T, RosterError> {
        match self.write_error {
            None => Ok(self.value),
            Some(err) => Err(err),
        }
    }
}
