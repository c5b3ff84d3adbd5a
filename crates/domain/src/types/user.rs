//! User record types
//!
//! One record per directory entry, persisted as a JSON array in local
//! storage. Field names serialize in camelCase; every attribute defaults to
//! empty when the stored object lacks it or holds a wrong-typed value. Keys
//! this version does not know are carried in `extra` and written back as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fields::{EducationField, ExperienceField, ProfileField};
use super::lenient;

/// A person's profile in the directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Assigned once at creation, never reassigned.
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub alternate_phone: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub pincode: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub country: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub state: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub gender: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub skills: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub projects: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub resume: String,
    /// Display order is insertion order.
    #[serde(default, deserialize_with = "lenient::entries")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub experience: Vec<ExperienceEntry>,
    /// Stored keys outside the known set.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// Blank record with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }

    /// "First Last", without stray whitespace when either part is empty.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn field(&self, field: ProfileField) -> &str {
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

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
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
        };
        *slot = value.into();
    }
}

/// One education line on a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "lenient::string")]
    pub school: String,
    #[serde(deserialize_with = "lenient::string")]
    pub degree: String,
    #[serde(deserialize_with = "lenient::string")]
    pub course: String,
    #[serde(deserialize_with = "lenient::string")]
    pub year: String,
    #[serde(deserialize_with = "lenient::string")]
    pub grade: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EducationEntry {
    pub fn get(&self, field: EducationField) -> &str {
        match field {
            EducationField::School => &self.school,
            EducationField::Degree => &self.degree,
            EducationField::Course => &self.course,
            EducationField::Year => &self.year,
            EducationField::Grade => &self.grade,
        }
    }

    pub fn set(&mut self, field: EducationField, value: impl Into<String>) {
        let slot = match field {
            EducationField::School => &mut self.school,
            EducationField::Degree => &mut self.degree,
            EducationField::Course => &mut self.course,
            EducationField::Year => &mut self.year,
            EducationField::Grade => &mut self.grade,
        };
        *slot = value.into();
    }
}

/// One work-experience line on a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "lenient::string")]
    pub domain: String,
    #[serde(deserialize_with = "lenient::string")]
    pub subdomain: String,
    #[serde(deserialize_with = "lenient::string")]
    pub years: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExperienceEntry {
    pub fn get(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Domain => &self.domain,
            ExperienceField::Subdomain => &self.subdomain,
            ExperienceField::Years => &self.years,
        }
    }

    pub fn set(&mut self, field: ExperienceField, value: impl Into<String>) {
        let slot = match field {
            ExperienceField::Domain => &mut self.domain,
            ExperienceField::Subdomain => &mut self.subdomain,
            ExperienceField::Years => &mut self.years,
        };
        *slot = value.into();
    }
}
