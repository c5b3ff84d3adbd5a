//! Profile editor controller
//!
//! A loaded profile keeps two copies of the record: `record`, the last
//! canonical state, and `draft`, where edits accumulate. Edit mode is a small
//! state machine driven by [`EditTransition`]:
//!
//! | From      | Transition  | To        | Draft                    |
//! |-----------|-------------|-----------|--------------------------|
//! | viewing   | `Enter`     | editing   | kept                     |
//! | editing   | `Cancel`    | viewing   | reset to `record`        |
//! | any       | `ForceEdit` | editing   | kept (adding a sub-entry)|
//! | editing   | `Commit`    | viewing   | merged into `record`     |

use std::sync::Arc;

use roster_domain::{
    EducationEntry, EducationField, ExperienceEntry, ExperienceField, ProfileField, Result,
    RosterError, Tab, UiConfig, UserPatch, UserRecord,
};
use tracing::{debug, error, info, warn};

use super::notice::Notice;
use crate::user::UserCollectionService;

/// Edit-mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTransition {
    /// Start editing; the draft is kept as-is.
    Enter,
    /// Stop editing and discard the draft.
    Cancel,
    /// Start editing as a side effect of adding a sub-entry.
    ForceEdit,
    /// Merge the draft into the record and stop editing.
    Commit,
}

/// Name, email and phone shown above the tabs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileHeader {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A loaded profile being viewed or edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSession {
    record: UserRecord,
    draft: UserRecord,
    editing: bool,
    active_tab: Tab,
}

impl ProfileSession {
    pub fn new(record: UserRecord) -> Self {
        let draft = record.clone();
        Self { record, draft, editing: false, active_tab: Tab::default() }
    }

    /// Last canonical state.
    pub const fn record(&self) -> &UserRecord {
        &self.record
    }

    pub const fn draft(&self) -> &UserRecord {
        &self.draft
    }

    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    pub const fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Whether the draft differs from the record.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.record
    }

    pub fn header(&self) -> ProfileHeader {
        ProfileHeader {
            name: self.record.display_name(),
            email: self.record.email.clone(),
            phone: self.record.phone.clone(),
        }
    }

    /// Text shown when viewing the attached resume.
    pub fn resume_preview(&self) -> Option<String> {
        (!self.draft.resume.is_empty()).then(|| format!("Viewing {}", self.draft.resume))
    }

    /// Apply one edit-mode transition.
    pub fn transition(&mut self, transition: EditTransition) {
        match transition {
            EditTransition::Enter | EditTransition::ForceEdit => self.editing = true,
            EditTransition::Cancel => {
                self.editing = false;
                self.draft = self.record.clone();
            }
            EditTransition::Commit => {
                UserPatch::from_record(&self.draft).apply_to(&mut self.record);
                self.editing = false;
            }
        }
        debug!(user_id = %self.record.id, ?transition, editing = self.editing, "edit transition");
    }

    /// Edit / Cancel button. Returns whether edit mode is now on.
    pub fn toggle_edit(&mut self) -> bool {
        let transition = if self.editing { EditTransition::Cancel } else { EditTransition::Enter };
        self.transition(transition);
        self.editing
    }

    /// Change one scalar field of the draft.
    ///
    /// # Errors
    /// `RosterError::InvalidInput` when not in edit mode.
    pub fn change_field(&mut self, field: ProfileField, value: impl Into<String>) -> Result<()> {
        self.ensure_editing(field.as_str())?;
        self.draft.set_field(field, value);
        Ok(())
    }

    /// Append a blank education entry and switch edit mode on. Returns the
    /// new entry's index.
    pub fn add_education(&mut self) -> usize {
        self.draft.education.push(EducationEntry::default());
        self.transition(EditTransition::ForceEdit);
        self.draft.education.len() - 1
    }

    /// # Errors
    /// `RosterError::InvalidInput` when not editing or `index` is out of range.
    pub fn update_education(
        &mut self,
        index: usize,
        field: EducationField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.ensure_editing("education")?;
        let len = self.draft.education.len();
        let entry = self
            .draft
            .education
            .get_mut(index)
            .ok_or_else(|| out_of_range("education", index, len))?;
        entry.set(field, value);
        Ok(())
    }

    /// Remove the education entry at `index`; later entries shift down.
    ///
    /// # Errors
    /// `RosterError::InvalidInput` when `index` is out of range.
    pub fn remove_education(&mut self, index: usize) -> Result<EducationEntry> {
        let len = self.draft.education.len();
        if index >= len {
            return Err(out_of_range("education", index, len));
        }
        Ok(self.draft.education.remove(index))
    }

    /// Append a blank experience entry and switch edit mode on. Returns the
    /// new entry's index.
    pub fn add_experience(&mut self) -> usize {
        self.draft.experience.push(ExperienceEntry::default());
        self.transition(EditTransition::ForceEdit);
        self.draft.experience.len() - 1
    }

    /// # Errors
    /// `RosterError::InvalidInput` when not editing or `index` is out of range.
    pub fn update_experience(
        &mut self,
        index: usize,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.ensure_editing("experience")?;
        let len = self.draft.experience.len();
        let entry = self
            .draft
            .experience
            .get_mut(index)
            .ok_or_else(|| out_of_range("experience", index, len))?;
        entry.set(field, value);
        Ok(())
    }

    /// Remove the experience entry at `index`; later entries shift down.
    ///
    /// # Errors
    /// `RosterError::InvalidInput` when `index` is out of range.
    pub fn remove_experience(&mut self, index: usize) -> Result<ExperienceEntry> {
        let len = self.draft.experience.len();
        if index >= len {
            return Err(out_of_range("experience", index, len));
        }
        Ok(self.draft.experience.remove(index))
    }

    fn ensure_editing(&self, target: &str) -> Result<()> {
        if self.editing {
            Ok(())
        } else {
            Err(RosterError::InvalidInput(format!("{target} cannot change outside edit mode")))
        }
    }
}

fn out_of_range(list: &str, index: usize, len: usize) -> RosterError {
    RosterError::InvalidInput(format!("no {list} entry at index {index} (have {len})"))
}

/// Load state of the profile page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileState {
    Loading,
    /// Terminal: the id matched no record.
    NotFound,
    Loaded(ProfileSession),
}

/// The one way out of the not-found state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    Back,
}

/// Drives the profile page for one id
pub struct ProfileEditController {
    service: Arc<UserCollectionService>,
    ui: UiConfig,
    state: ProfileState,
    notice: Option<Notice>,
}

impl ProfileEditController {
    pub fn new(service: Arc<UserCollectionService>, ui: UiConfig) -> Self {
        Self { service, ui, state: ProfileState::Loading, notice: None }
    }

    pub const fn state(&self) -> &ProfileState {
        &self.state
    }

    /// Fetch `id` after the simulated latency. Replaces any prior state; a
    /// failed fetch shows as not found.
    pub async fn load(&mut self, id: &str) {
        self.state = ProfileState::Loading;
        self.notice = None;
        tokio::time::sleep(self.ui.profile_load_delay()).await;

        let service = Arc::clone(&self.service);
        let lookup = id.to_string();
        let outcome = tokio::task::spawn_blocking(move || service.find_by_id(&lookup)).await;
        self.state = match outcome {
            Ok(Some(record)) => {
                info!(user_id = id, "profile loaded");
                ProfileState::Loaded(ProfileSession::new(record))
            }
            Ok(None) => {
                info!(user_id = id, "profile not found");
                ProfileState::NotFound
            }
            Err(err) => {
                error!(user_id = id, error = %err, "profile load failed");
                ProfileState::NotFound
            }
        };
    }

    /// `Some(Back)` in the not-found state.
    pub const fn recovery_action(&self) -> Option<RecoveryAction> {
        match self.state {
            ProfileState::NotFound => Some(RecoveryAction::Back),
            _ => None,
        }
    }

    pub const fn session(&self) -> Option<&ProfileSession> {
        match &self.state {
            ProfileState::Loaded(session) => Some(session),
            _ => None,
        }
    }

    /// The loaded session, for edits.
    ///
    /// # Errors
    /// `RosterError::NotFound` unless a profile is loaded.
    pub fn session_mut(&mut self) -> Result<&mut ProfileSession> {
        match &mut self.state {
            ProfileState::Loaded(session) => Ok(session),
            ProfileState::NotFound => Err(RosterError::NotFound("user not found".into())),
            ProfileState::Loading => Err(RosterError::InvalidInput("profile is still loading".into())),
        }
    }

    /// Commit the draft: scalars merged, both sub-entry lists replaced.
    ///
    /// No field validation is applied. Returns the notice for the user:
    /// `Saved`, or `WriteFailed` when the store rejected the write (the
    /// merge is kept on screen either way).
    ///
    /// # Errors
    /// `RosterError::NotFound` / `InvalidInput` unless a profile is loaded,
    /// or whatever the patch fails with.
    pub fn save(&mut self) -> Result<Notice> {
        let service = Arc::clone(&self.service);
        let session = self.session_mut()?;
        let id = session.record.id.clone();

        let committed = service.patch_by_id(&id, &UserPatch::from_record(&session.draft))?;
        if committed.value.is_none() {
            warn!(user_id = %id, "saved profile no longer exists in the store");
        }
        session.transition(EditTransition::Commit);

        let notice = if committed.is_persisted() { Notice::Saved } else { Notice::WriteFailed };
        self.notice = Some(notice);
        Ok(notice)
    }

    pub const fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Pending notice, cleared once read.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
