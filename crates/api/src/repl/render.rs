//! Plain-text rendering of the two pages

use std::fmt::Write as _;

use roster_core::{
    AddUserFlow, ListState, ListViewController, ProfileEditController, ProfileSession,
    ProfileState,
};
use roster_domain::{AddUserField, ProfileField, Tab, UserRecord};

const BASIC_FIELDS: [ProfileField; 10] = [
    ProfileField::FirstName,
    ProfileField::LastName,
    ProfileField::Email,
    ProfileField::Phone,
    ProfileField::AlternatePhone,
    ProfileField::Address,
    ProfileField::Pincode,
    ProfileField::Country,
    ProfileField::State,
    ProfileField::Gender,
];
const EDUCATION_FIELDS: [ProfileField; 2] = [ProfileField::Skills, ProfileField::Projects];
const EXPERIENCE_FIELDS: [ProfileField; 2] = [ProfileField::Linkedin, ProfileField::Resume];

/// Scalar fields shown on `tab`.
pub const fn tab_fields(tab: Tab) -> &'static [ProfileField] {
    match tab {
        Tab::Basic => &BASIC_FIELDS,
        Tab::Education => &EDUCATION_FIELDS,
        Tab::Experience => &EXPERIENCE_FIELDS,
    }
}

pub fn directory(list: &ListViewController) -> String {
    let mut out = String::from("Users\n");
    match list.state() {
        ListState::Loading => out.push_str("Loading...\n"),
        ListState::Error(message) => {
            let _ = writeln!(out, "{message}");
        }
        ListState::Ready(users) if users.is_empty() => out.push_str("No users found\n"),
        ListState::Ready(_) => {
            let _ = writeln!(out, "{:>3}  {:<24} {:<28} ID", "#", "Name", "Email");
            for row in list.rows() {
                let _ = writeln!(
                    out,
                    "{:>3}  {:<24} {:<28} {}",
                    row.serial, row.name, row.email, row.id
                );
            }
        }
    }
    if let Some(panel) = list.add_panel() {
        out.push_str(&add_panel(panel));
    }
    out
}

pub fn add_panel(panel: &AddUserFlow) -> String {
    let mut out = String::from("-- Add user --\n");
    for field in AddUserField::ALL {
        let _ = writeln!(out, "  {:<10} {}", field.as_str(), panel.draft().get(*field));
    }
    if panel.is_saving() {
        out.push_str("  Saving...\n");
    }
    if let Some(error) = panel.error() {
        let _ = writeln!(out, "  {error}");
    }
    out
}

pub fn profile(controller: &ProfileEditController) -> String {
    match controller.state() {
        ProfileState::Loading => "Loading...\n".to_string(),
        ProfileState::NotFound => "User not found\n(type `back` to return)\n".to_string(),
        ProfileState::Loaded(session) => session_view(session),
    }
}

fn session_view(session: &ProfileSession) -> String {
    let header = session.header();
    let mut out = String::new();
    let _ = writeln!(out, "{}", header.name);
    let _ = writeln!(out, "{}  {}", header.email, header.phone);

    let tabs: Vec<String> = Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == session.active_tab() {
                format!("[{}]", tab.label())
            } else {
                tab.label().to_string()
            }
        })
        .collect();
    let mode = if session.is_editing() { "editing" } else { "viewing" };
    let _ = writeln!(out, "{}   ({mode})", tabs.join(" | "));

    let draft = session.draft();
    match session.active_tab() {
        Tab::Basic => {}
        Tab::Education => education(&mut out, draft),
        Tab::Experience => experience(&mut out, draft),
    }
    for field in tab_fields(session.active_tab()) {
        let _ = writeln!(out, "  {:<15} {}", field.as_str(), draft.field(*field));
    }
    if session.active_tab() == Tab::Experience {
        if let Some(preview) = session.resume_preview() {
            let _ = writeln!(out, "  ({preview})");
        }
    }
    out
}

fn education(out: &mut String, draft: &UserRecord) {
    if draft.education.is_empty() {
        out.push_str("  No education entries\n");
    }
    for (i, entry) in draft.education.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} | {} | {} | {} | {}",
            i + 1,
            entry.school,
            entry.degree,
            entry.course,
            entry.year,
            entry.grade
        );
    }
}

fn experience(out: &mut String, draft: &UserRecord) {
    if draft.experience.is_empty() {
        out.push_str("  No experience entries\n");
    }
    for (i, entry) in draft.experience.iter().enumerate() {
        let _ =
            writeln!(out, "  {}. {} | {} | {}", i + 1, entry.domain, entry.subdomain, entry.years);
    }
}
