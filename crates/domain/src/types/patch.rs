//! Partial user records
//!
//! A [`UserPatch`] carries only the keys a caller wants to change. Merging is
//! shallow: a present scalar overwrites, a present list replaces the stored
//! list wholesale, an absent key leaves the stored value untouched. The id is
//! never part of a patch.

use serde::{Deserialize, Serialize};

use super::fields::{AddUserField, ProfileField};
use super::user::{EducationEntry, ExperienceEntry, UserRecord};

/// Shallow partial of a [`UserRecord`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExperienceEntry>>,
}

impl UserPatch {
    /// Patch carrying every attribute of `record` (except its id).
    ///
    /// This is what a profile save commits: all scalars merged, both
    /// sub-entry lists replaced.
    pub fn from_record(record: &UserRecord) -> Self {
        let mut patch = Self {
            education: Some(record.education.clone()),
            experience: Some(record.experience.clone()),
            ..Self::default()
        };
        for field in ProfileField::ALL {
            patch.set(*field, record.field(*field));
        }
        patch
    }

    /// Chainable setter for a scalar field.
    #[must_use]
    pub fn with(mut self, field: ProfileField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        ProfileField::ALL.iter().all(|field| self.slot(*field).is_none())
            && self.education.is_none()
            && self.experience.is_none()
    }

    /// Merge onto `record` in place.
    pub fn apply_to(&self, record: &mut UserRecord) {
        for field in ProfileField::ALL {
            if let Some(value) = self.slot(*field) {
                record.set_field(*field, value.clone());
            }
        }
        if let Some(education) = &self.education {
            record.education.clone_from(education);
        }
        if let Some(experience) = &self.experience {
            record.experience.clone_from(experience);
        }
    }

    /// Build a fresh record with `id`; every key the patch lacks is empty.
    pub fn into_record(self, id: impl Into<String>) -> UserRecord {
        let mut record = UserRecord::new(id);
        self.apply_to(&mut record);
        record
    }

    const fn slot(&self, field: ProfileField) -> &Option<String> {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::AlternatePhone => &self.alternate_phone,
            ProfileField::Address => &self.address,
            ProfileField::Pincode => &self.pincode,
            ProfileField::Country => &self.country,
            ProfileField::State => &self.state,
            ProfileField::Gender => &self.gender,
            ProfileField::Skills => &self.skills,
            ProfileField::Projects => &self.projects,
            ProfileField::Linkedin => &self.linkedin,
            ProfileField::Resume => &self.resume,
        }
    }

    fn slot_mut(&mut self, field: ProfileField) -> &mut Option<String> {
        match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::AlternatePhone => &mut self.alternate_phone,
            ProfileField::Address => &mut self.address,
            ProfileField::Pincode => &mut self.pincode,
            ProfileField::Country => &mut self.country,
            ProfileField::State => &mut self.state,
            ProfileField::Gender => &mut self.gender,
            ProfileField::Skills => &mut self.skills,
            ProfileField::Projects => &mut self.projects,
            ProfileField::Linkedin => &mut self.linkedin,
            ProfileField::Resume => &mut self.resume,
        }
    }
}

/// Draft collected by the add-user panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl NewUser {
    pub fn get(&self, field: AddUserField) -> &str {
        match field {
            AddUserField::FirstName => &self.first_name,
            AddUserField::LastName => &self.last_name,
            AddUserField::Email => &self.email,
            AddUserField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: AddUserField, value: impl Into<String>) {
        let slot = match field {
            AddUserField::FirstName => &mut self.first_name,
            AddUserField::LastName => &mut self.last_name,
            AddUserField::Email => &mut self.email,
            AddUserField::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    /// The insert patch: the four collected fields plus empty sub-sections.
    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            first_name: Some(self.first_name),
            last_name: Some(self.last_name),
            email: Some(self.email),
            phone: Some(self.phone),
            skills: Some(String::new()),
            projects: Some(String::new()),
            linkedin: Some(String::new()),
            resume: Some(String::new()),
            education: Some(Vec::new()),
            experience: Some(Vec::new()),
            ..UserPatch::default()
        }
    }
}
