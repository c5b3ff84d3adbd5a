//! Directory list page controller

use std::sync::Arc;

use roster_domain::constants::{
    DELETE_CONFIRM_PROMPT, EMPTY_EMAIL_PLACEHOLDER, LOAD_USERS_FAILED_MESSAGE,
};
use roster_domain::{Result, RosterError, UiConfig, UserRecord};
use tracing::{debug, error, info};

use super::add_user::AddUserFlow;
use super::notice::Notice;
use super::ports::Confirmation;
use crate::user::UserCollectionService;

/// Load state of the directory page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Error(String),
    Ready(Vec<UserRecord>),
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    /// 1-based position in the table.
    pub serial: usize,
    pub id: String,
    pub name: String,
    /// The email, or `-` when empty.
    pub email: String,
}

impl UserRow {
    fn from_record(serial: usize, user: &UserRecord) -> Self {
        let email = if user.email.is_empty() {
            EMPTY_EMAIL_PLACEHOLDER.to_string()
        } else {
            user.email.clone()
        };
        Self { serial, id: user.id.clone(), name: user.display_name(), email }
    }
}

/// What a delete request ended in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation; nothing changed.
    Declined,
    /// No record had the id.
    NotFound,
}

/// Drives the directory page
pub struct ListViewController {
    service: Arc<UserCollectionService>,
    ui: UiConfig,
    state: ListState,
    add_panel: Option<AddUserFlow>,
    notice: Option<Notice>,
}

impl ListViewController {
    pub fn new(service: Arc<UserCollectionService>, ui: UiConfig) -> Self {
        Self { service, ui, state: ListState::Loading, add_panel: None, notice: None }
    }

    pub const fn state(&self) -> &ListState {
        &self.state
    }

    /// Displayed users; empty unless ready.
    pub fn users(&self) -> &[UserRecord] {
        match &self.state {
            ListState::Ready(users) => users,
            _ => &[],
        }
    }

    /// Table rows for the displayed users.
    pub fn rows(&self) -> Vec<UserRow> {
        self.users().iter().enumerate().map(|(i, user)| UserRow::from_record(i + 1, user)).collect()
    }

    /// Ready with no users ("No users found").
    pub fn is_empty(&self) -> bool {
        matches!(&self.state, ListState::Ready(users) if users.is_empty())
    }

    /// Fetch the collection after the simulated latency.
    pub async fn load(&mut self) {
        self.state = ListState::Loading;
        tokio::time::sleep(self.ui.list_load_delay()).await;

        let service = Arc::clone(&self.service);
        let outcome = tokio::task::spawn_blocking(move || service.list_all()).await;
        match outcome {
            Ok(committed) => {
                if committed.write_error.is_some() {
                    self.notice = Some(Notice::WriteFailed);
                }
                info!(count = committed.value.len(), "user list ready");
                self.state = ListState::Ready(committed.value);
            }
            Err(err) => {
                error!(error = %err, "user list load failed");
                self.state = ListState::Error(LOAD_USERS_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Delete `id` after the user confirms.
    ///
    /// # Errors
    /// `RosterError::InvalidInput` when the list is not ready, or whatever the
    /// delete fails with.
    pub fn delete(&mut self, id: &str, confirmation: &dyn Confirmation) -> Result<DeleteOutcome> {
        if !matches!(self.state, ListState::Ready(_)) {
            return Err(RosterError::InvalidInput("user list is not loaded".into()));
        }
        if !confirmation.confirm(DELETE_CONFIRM_PROMPT) {
            debug!(user_id = id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let committed = self.service.delete_by_id(id)?;
        let removed = committed.value;

        if committed.write_error.is_some() {
            // The store still holds the old collection; drop the row locally.
            self.notice = Some(Notice::WriteFailed);
            if let ListState::Ready(users) = &mut self.state {
                users.retain(|user| user.id != id);
            }
        } else {
            self.refresh();
        }

        Ok(if removed { DeleteOutcome::Deleted } else { DeleteOutcome::NotFound })
    }

    /// Re-read the collection without the simulated latency.
    pub fn refresh(&mut self) {
        let committed = self.service.list_all();
        if committed.write_error.is_some() {
            self.notice = Some(Notice::WriteFailed);
        }
        self.state = ListState::Ready(committed.value);
    }

    /// Show the add-user panel with an empty draft.
    pub fn open_add_panel(&mut self) {
        self.add_panel = Some(AddUserFlow::new(self.ui.add_user_delay()));
    }

    /// Hide the add-user panel, discarding its draft.
    pub fn close_add_panel(&mut self) {
        self.add_panel = None;
    }

    pub const fn add_panel(&self) -> Option<&AddUserFlow> {
        self.add_panel.as_ref()
    }

    pub fn add_panel_mut(&mut self) -> Option<&mut AddUserFlow> {
        self.add_panel.as_mut()
    }

    /// Submit the add-user panel; on success the new user is appended to the
    /// displayed list and the panel closes.
    ///
    /// # Errors
    /// `RosterError::InvalidInput` when the panel is closed;
    /// `RosterError::Validation` when required fields are empty (the panel
    /// stays open with its inline error).
    pub async fn submit_add_user(&mut self) -> Result<UserRecord> {
        let service = Arc::clone(&self.service);
        let panel = self
            .add_panel
            .as_mut()
            .ok_or_else(|| RosterError::InvalidInput("add-user panel is not open".into()))?;

        let committed = panel.submit(&service).await?;
        if committed.write_error.is_some() {
            self.notice = Some(Notice::WriteFailed);
        }

        let record = committed.value;
        if let ListState::Ready(users) = &mut self.state {
            users.push(record.clone());
        }
        self.add_panel = None;
        Ok(record)
    }

    pub const fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Pending notice, cleared once read.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
