//! Name-addressed form fields and profile tabs

use crate::impl_field_name_conversions;

/// Editable scalar fields of a [`UserRecord`](super::UserRecord)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Phone,
    AlternatePhone,
    Address,
    Pincode,
    Country,
    State,
    Gender,
    Skills,
    Projects,
    Linkedin,
    Resume,
}

impl_field_name_conversions!(ProfileField {
    FirstName => "firstName",
    LastName => "lastName",
    Email => "email",
    Phone => "phone",
    AlternatePhone => "alternatePhone",
    Address => "address",
    Pincode => "pincode",
    Country => "country",
    State => "state",
    Gender => "gender",
    Skills => "skills",
    Projects => "projects",
    Linkedin => "linkedin",
    Resume => "resume",
});

/// Fields collected by the add-user panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddUserField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl_field_name_conversions!(AddUserField {
    FirstName => "firstName",
    LastName => "lastName",
    Email => "email",
    Phone => "phone",
});

/// Columns of an [`EducationEntry`](super::EducationEntry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationField {
    School,
    Degree,
    Course,
    Year,
    Grade,
}

impl_field_name_conversions!(EducationField {
    School => "school",
    Degree => "degree",
    Course => "course",
    Year => "year",
    Grade => "grade",
});

/// Columns of an [`ExperienceEntry`](super::ExperienceEntry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceField {
    Domain,
    Subdomain,
    Years,
}

impl_field_name_conversions!(ExperienceField {
    Domain => "domain",
    Subdomain => "subdomain",
    Years => "years",
});

/// Profile editor tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Basic,
    Education,
    Experience,
}

impl_field_name_conversions!(Tab {
    Basic => "basic",
    Education => "education",
    Experience => "experience",
});

impl Tab {
    /// Heading shown on the tab button.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic Info",
            Self::Education => "Education & skills",
            Self::Experience => "Experience",
        }
    }
}
