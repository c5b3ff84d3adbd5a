//! Add-user side panel

use std::time::Duration;

use roster_common::validation::Validator;
use roster_domain::constants::ADD_USER_REQUIRED_MESSAGE;
use roster_domain::{AddUserField, NewUser, Result, RosterError, UserRecord};
use tracing::{debug, info};

use crate::user::{Committed, UserCollectionService};

/// Draft and submit state of the add-user panel
#[derive(Debug, Clone, Default)]
pub struct AddUserFlow {
    draft: NewUser,
    saving: bool,
    error: Option<String>,
    delay: Duration,
}

impl AddUserFlow {
    /// Fresh panel with an empty draft; `delay` simulates the save round-trip.
    pub fn new(delay: Duration) -> Self {
        Self { delay, ..Self::default() }
    }

    pub const fn draft(&self) -> &NewUser {
        &self.draft
    }

    pub fn change_field(&mut self, field: AddUserField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Whether a submit is in flight.
    pub const fn is_saving(&self) -> bool {
        self.saving
    }

    /// Inline error from the last submit.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate and insert the draft.
    ///
    /// Only `firstName` and `email` are required, and only to be non-empty.
    ///
    /// # Errors
    /// `RosterError::Validation` when a required field is empty (the inline
    /// error is set and nothing is inserted), or whatever the insert fails
    /// with.
    pub async fn submit(&mut self, service: &UserCollectionService) -> Result<Committed<UserRecord>> {
        self.error = None;

        let mut validator = Validator::new();
        validator
            .require(AddUserField::FirstName.as_str(), &self.draft.first_name)
            .require(AddUserField::Email.as_str(), &self.draft.email);
        if let Err(err) = validator.finalize() {
            debug!(fields = ?err.fields(), "add-user submit rejected");
            self.error = Some(ADD_USER_REQUIRED_MESSAGE.to_string());
            return Err(RosterError::Validation(err.to_string()));
        }

        self.saving = true;
        tokio::time::sleep(self.delay).await;
        let result = service.insert(self.draft.clone().into_patch());
        self.saving = false;

        let committed = result?;
        info!(user_id = %committed.value.id, "user added from panel");
        Ok(committed)
    }
}
