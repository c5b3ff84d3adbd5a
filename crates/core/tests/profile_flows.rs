//! Integration tests for the profile editor.

mod support;

use roster_core::{Notice, ProfileEditController, ProfileState, RecoveryAction};
use roster_domain::constants::USERS_STORAGE_KEY;
use roster_domain::{EducationField, ProfileField, Tab, UserPatch, UserRecord};
use support::{instant_ui, service_over, MockKeyValueStore};

async fn open_profile(store: &MockKeyValueStore, id: &str) -> ProfileEditController {
    let service = service_over(store);
    let _ = service.ensure_seeded();
    let mut profile = ProfileEditController::new(service, instant_ui());
    profile.load(id).await;
    profile
}

fn stored_user(store: &MockKeyValueStore, id: &str) -> Option<UserRecord> {
    let raw = store.raw(USERS_STORAGE_KEY)?;
    let users: Vec<UserRecord> = serde_json::from_str(&raw).ok()?;
    users.into_iter().find(|user| user.id == id)
}

#[tokio::test]
async fn loads_seeded_profile() {
    let store = MockKeyValueStore::new();
    let profile = open_profile(&store, "1").await;

    let session = profile.session().expect("loaded");
    assert!(!session.is_editing());
    assert_eq!(session.active_tab(), Tab::Basic);
    let header = session.header();
    assert_eq!(header.name, "Dave Richards");
    assert_eq!(header.email, "dave@mail.com");
    assert_eq!(header.phone, "+91 8332883854");
    assert_eq!(profile.recovery_action(), None);
}

#[tokio::test]
async fn unknown_id_is_not_found_with_back_action() {
    let store = MockKeyValueStore::new();
    let mut profile = open_profile(&store, "999").await;

    assert_eq!(profile.state(), &ProfileState::NotFound);
    assert_eq!(profile.recovery_action(), Some(RecoveryAction::Back));
    assert!(profile.session_mut().is_err());
    assert!(profile.save().is_err());
}

#[tokio::test]
async fn add_then_remove_education_leaves_edit_mode_on() {
    let store = MockKeyValueStore::new();
    let mut profile = open_profile(&store, "2").await;
    let session = profile.session_mut().expect("loaded");

    assert!(!session.is_editing());
    let index = session.add_education();
    assert_eq!(index, 0);
    assert!(session.is_editing());

    session.remove_education(0).expect("entry exists");
    assert!(session.draft().education.is_empty());
    assert!(session.is_editing());
}

#[tokio::test]
async fn cancel_restores_the_original_value() {
    let store = MockKeyValueStore::new();
    let mut profile = open_profile(&store, "1").await;
    let session = profile.session_mut().expect("loaded");

    session.toggle_edit();
    session.change_field(ProfileField::FirstName, "X").expect("editing");
    assert_eq!(session.draft().first_name, "X");

    session.toggle_edit();
    assert!(!session.is_editing());
    assert_eq!(session.draft().first_name, "Dave");
    assert_eq!(stored_user(&store, "1").expect("stored").first_name, "Dave");
}

#[tokio::test]
async fn save_persists_scalars_and_replaces_lists() {
    let store = MockKeyValueStore::new();
    let mut profile = open_profile(&store, "1").await;
    let session = profile.session_mut().expect("loaded");

    session.toggle_edit();
    session.change_field(ProfileField::Skills, "Rust").expect("editing");
    session.update_education(0, EducationField::Grade, "A").expect("entry exists");
    let added = session.add_education();
    session.update_education(added, EducationField::School, "Night School").expect("entry exists");
    session.remove_experience(0).expect("entry exists");

    let notice = profile.save().expect("save runs");
    assert_eq!(notice, Notice::Saved);
    assert_eq!(notice.message(), "Saved");

    let session = profile.session().expect("loaded");
    assert!(!session.is_editing());
    assert_eq!(session.record().skills, "Rust");

    let stored = stored_user(&store, "1").expect("stored");
    assert_eq!(stored.skills, "Rust");
    assert_eq!(stored.first_name, "Dave");
    assert_eq!(stored.education.len(), 2);
    assert_eq!(stored.education[0].grade, "A");
    assert_eq!(stored.education[1].school, "Night School");
    assert!(stored.experience.is_empty());
}

#[tokio::test]
async fn rejected_write_keeps_merge_and_warns() {
    let store = MockKeyValueStore::new();
    let mut profile = open_profile(&store, "3").await;
    store.reject_writes(true);

    let session = profile.session_mut().expect("loaded");
    session.toggle_edit();
    session.change_field(ProfileField::Country, "India").expect("editing");

    let notice = profile.save().expect("save runs");
    assert_eq!(notice, Notice::WriteFailed);
    assert!(notice.is_warning());
    assert_eq!(profile.take_notice(), Some(Notice::WriteFailed));
    assert_eq!(profile.session().expect("loaded").record().country, "India");
    assert!(stored_user(&store, "3").expect("stored").country.is_empty());
}

#[tokio::test]
async fn edits_outside_edit_mode_are_refused() {
    let store = MockKeyValueStore::new();
    let mut profile = open_profile(&store, "1").await;
    let session = profile.session_mut().expect("loaded");

    assert!(session.change_field(ProfileField::Email, "new@mail.com").is_err());
    assert!(session.update_education(0, EducationField::Year, "2020").is_err());
    assert_eq!(session.draft().email, "dave@mail.com");
}

#[tokio::test]
async fn patching_unknown_id_leaves_collection_unchanged() {
    let store = MockKeyValueStore::new();
    let service = service_over(&store);
    let _ = service.ensure_seeded();
    let before = store.raw(USERS_STORAGE_KEY);
    let writes_before = store.write_count();

    let committed = service
        .patch_by_id("nope", &UserPatch::default().with(ProfileField::FirstName, "Z"))
        .expect("patch runs");
    assert!(committed.value.is_none());
    assert_eq!(store.raw(USERS_STORAGE_KEY), before);
    assert_eq!(store.write_count(), writes_before);
}

#[tokio::test]
async fn resume_preview_reflects_the_draft() {
    let store = MockKeyValueStore::new();
    let mut profile = open_profile(&store, "1").await;
    let session = profile.session_mut().expect("loaded");

    assert_eq!(session.resume_preview().as_deref(), Some("Viewing myresume.pdf"));
    session.toggle_edit();
    session.change_field(ProfileField::Resume, "").expect("editing");
    assert_eq!(session.resume_preview(), None);
}

#[tokio::test]
async fn save_keeps_unknown_keys_on_the_record() {
    let store = MockKeyValueStore::new().with_raw(
        USERS_STORAGE_KEY,
        r#"[{"id":"5","firstName":"Ann","avatar":"a.png","education":[{"school":"X","honours":true}]}]"#,
    );
    let mut profile = open_profile(&store, "5").await;

    let session = profile.session_mut().expect("loaded");
    session.toggle_edit();
    session.change_field(ProfileField::LastName, "Lee").expect("editing");
    assert_eq!(profile.save().expect("save runs"), Notice::Saved);

    let raw = store.raw(USERS_STORAGE_KEY).expect("collection stored");
    let stored: serde_json::Value = serde_json::from_str(&raw).expect("stored JSON");
    assert_eq!(stored[0]["lastName"], "Lee");
    assert_eq!(stored[0]["avatar"], "a.png");
    assert_eq!(stored[0]["education"][0]["honours"], true);
}

#[tokio::test]
async fn failed_fetch_reads_as_not_found() {
    let store = MockKeyValueStore::new();
    let service = service_over(&store);
    let _ = service.ensure_seeded();
    store.panic_on_read(true);

    let mut profile = ProfileEditController::new(service, instant_ui());
    profile.load("1").await;

    assert_eq!(profile.state(), &ProfileState::NotFound);
    assert_eq!(profile.recovery_action(), Some(RecoveryAction::Back));
}
