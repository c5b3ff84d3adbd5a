//! Integration tests for the directory list and add-user panel.

mod support;

use roster_core::{DeleteOutcome, ListState, ListViewController, Notice};
use roster_domain::constants::{
    ADD_USER_REQUIRED_MESSAGE, EMPTY_EMAIL_PLACEHOLDER, LOAD_USERS_FAILED_MESSAGE,
    USERS_STORAGE_KEY,
};
use roster_domain::{AddUserField, RosterError, UserRecord};
use support::{instant_ui, service_over, MockKeyValueStore};

async fn loaded_list(store: &MockKeyValueStore) -> ListViewController {
    let mut list = ListViewController::new(service_over(store), instant_ui());
    list.load().await;
    list
}

fn stored_ids(store: &MockKeyValueStore) -> Vec<String> {
    let raw = store.raw(USERS_STORAGE_KEY).expect("collection stored");
    let users: Vec<UserRecord> = serde_json::from_str(&raw).expect("stored JSON");
    users.into_iter().map(|user| user.id).collect()
}

#[tokio::test]
async fn first_load_seeds_and_shows_three_rows() {
    let store = MockKeyValueStore::new();
    let list = loaded_list(&store).await;

    let rows = list.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].serial, 1);
    assert_eq!(rows[0].name, "Dave Richards");
    assert_eq!(rows[2].email, "nishta@mail.com");
    assert_eq!(stored_ids(&store), vec!["1", "2", "3"]);
    assert!(list.notice().is_none());
}

#[tokio::test]
async fn add_user_appends_a_fourth_record() {
    let store = MockKeyValueStore::new();
    let mut list = loaded_list(&store).await;

    list.open_add_panel();
    let panel = list.add_panel_mut().expect("panel open");
    panel.change_field(AddUserField::FirstName, "Ann");
    panel.change_field(AddUserField::Email, "ann@x.io");

    let record = list.submit_add_user().await.expect("insert succeeds");
    assert_eq!(record.id, "100");
    assert_eq!(record.first_name, "Ann");
    assert!(record.last_name.is_empty());
    assert!(record.education.is_empty());
    assert!(record.experience.is_empty());

    assert!(list.add_panel().is_none());
    assert_eq!(list.users().len(), 4);
    assert_eq!(stored_ids(&store), vec!["1", "2", "3", "100"]);
}

#[tokio::test]
async fn add_user_without_first_name_is_rejected() {
    let store = MockKeyValueStore::new();
    let mut list = loaded_list(&store).await;
    let writes_before = store.write_count();

    list.open_add_panel();
    list.add_panel_mut()
        .expect("panel open")
        .change_field(AddUserField::Email, "a@b.c");

    let err = list.submit_add_user().await.unwrap_err();
    assert!(matches!(err, RosterError::Validation(_)));

    let panel = list.add_panel().expect("panel stays open");
    assert_eq!(panel.error(), Some(ADD_USER_REQUIRED_MESSAGE));
    assert_eq!(panel.draft().email, "a@b.c");
    assert_eq!(list.users().len(), 3);
    assert_eq!(store.write_count(), writes_before);
}

#[tokio::test]
async fn empty_email_renders_placeholder() {
    let store = MockKeyValueStore::new()
        .with_raw(USERS_STORAGE_KEY, r#"[{"id":"7","firstName":"Solo"}]"#);
    let list = loaded_list(&store).await;

    let rows = list.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Solo");
    assert_eq!(rows[0].email, EMPTY_EMAIL_PLACEHOLDER);
}

#[tokio::test]
async fn stored_empty_collection_is_not_reseeded() {
    let store = MockKeyValueStore::new().with_raw(USERS_STORAGE_KEY, "[]");
    let list = loaded_list(&store).await;

    assert!(list.is_empty());
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn corrupt_collection_is_replaced_by_seed() {
    let store = MockKeyValueStore::new().with_raw(USERS_STORAGE_KEY, "{not json");
    let list = loaded_list(&store).await;

    assert_eq!(list.users().len(), 3);
    assert_eq!(stored_ids(&store), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn null_and_numeric_fields_do_not_reseed() {
    let store = MockKeyValueStore::new().with_raw(
        USERS_STORAGE_KEY,
        r#"[{"id":"42","firstName":"Keep","email":"k@x.io","phone":null,"pincode":560001}]"#,
    );
    let list = loaded_list(&store).await;

    let rows = list.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "42");
    assert_eq!(rows[0].name, "Keep");
    assert_eq!(list.users()[0].pincode, "560001");
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn delete_leaves_unknown_keys_of_other_records_alone() {
    let store = MockKeyValueStore::new().with_raw(
        USERS_STORAGE_KEY,
        r#"[{"id":"1","firstName":"A","avatar":"a.png"},{"id":"2","firstName":"B"}]"#,
    );
    let mut list = loaded_list(&store).await;

    let outcome = list.delete("2", &|_: &str| true).expect("delete runs");
    assert_eq!(outcome, DeleteOutcome::Deleted);

    let raw = store.raw(USERS_STORAGE_KEY).expect("collection stored");
    let stored: serde_json::Value = serde_json::from_str(&raw).expect("stored JSON");
    assert_eq!(stored.as_array().map(Vec::len), Some(1));
    assert_eq!(stored[0]["avatar"], "a.png");
}

#[tokio::test]
async fn failed_fetch_shows_error_state() {
    let store = MockKeyValueStore::new();
    store.panic_on_read(true);
    let list = loaded_list(&store).await;

    assert_eq!(list.state(), &ListState::Error(LOAD_USERS_FAILED_MESSAGE.to_string()));
    assert!(list.rows().is_empty());
}

#[tokio::test]
async fn declined_delete_changes_nothing() {
    let store = MockKeyValueStore::new();
    let mut list = loaded_list(&store).await;
    let writes_before = store.write_count();

    let outcome = list.delete("2", &|_: &str| false).expect("delete runs");
    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(list.users().len(), 3);
    assert_eq!(store.write_count(), writes_before);
}

#[tokio::test]
async fn confirmed_delete_removes_the_row() {
    let store = MockKeyValueStore::new();
    let mut list = loaded_list(&store).await;

    let outcome = list.delete("2", &|_: &str| true).expect("delete runs");
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(stored_ids(&store), vec!["1", "3"]);
    let serials: Vec<usize> = list.rows().iter().map(|row| row.serial).collect();
    assert_eq!(serials, vec![1, 2]);
}

#[tokio::test]
async fn delete_asks_the_fixed_prompt() {
    let store = MockKeyValueStore::new();
    let mut list = loaded_list(&store).await;

    let asked = parking_lot::Mutex::new(None);
    let confirm = |prompt: &str| {
        *asked.lock() = Some(prompt.to_string());
        false
    };
    list.delete("1", &confirm).expect("delete runs");
    assert_eq!(asked.lock().as_deref(), Some("Delete this user?"));
}

#[tokio::test]
async fn delete_unknown_id_reports_not_found() {
    let store = MockKeyValueStore::new();
    let mut list = loaded_list(&store).await;

    let outcome = list.delete("nope", &|_: &str| true).expect("delete runs");
    assert_eq!(outcome, DeleteOutcome::NotFound);
    assert_eq!(list.users().len(), 3);
}

#[tokio::test]
async fn rejected_write_keeps_delete_on_screen_with_warning() {
    let store = MockKeyValueStore::new();
    let mut list = loaded_list(&store).await;
    store.reject_writes(true);

    let outcome = list.delete("1", &|_: &str| true).expect("delete runs");
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(list.take_notice(), Some(Notice::WriteFailed));
    assert_eq!(list.users().len(), 2);
    assert_eq!(stored_ids(&store), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn ids_stay_unique_across_inserts() {
    let store = MockKeyValueStore::new();
    let mut list = loaded_list(&store).await;

    for name in ["A", "B", "C"] {
        list.open_add_panel();
        let panel = list.add_panel_mut().expect("panel open");
        panel.change_field(AddUserField::FirstName, name);
        panel.change_field(AddUserField::Email, "x@y.z");
        list.submit_add_user().await.expect("insert succeeds");
    }

    let mut ids = stored_ids(&store);
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert_eq!(total, 6);
}
