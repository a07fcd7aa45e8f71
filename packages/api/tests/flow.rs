use api::actions::{send, settle_delete, settle_fetch, settle_submission};
use api::{MemoryDirectory, RemoteUser, UserDirectory};
use store::{Action, Field, Mode, NoticeLevel, Roster, UserForm, UserId};

fn remote(id: u64, name: &str) -> RemoteUser {
    RemoteUser {
        id: UserId(id),
        name: name.to_string(),
        email: format!("user{id}@example.com"),
    }
}

fn fill(roster: &mut Roster, first: &str, last: &str, email: &str, department: &str) {
    roster.set_field(Field::FirstName, first.to_string());
    roster.set_field(Field::LastName, last.to_string());
    roster.set_field(Field::Email, email.to_string());
    roster.set_field(Field::Department, department.to_string());
}

async fn started(directory: &MemoryDirectory) -> Roster {
    let mut roster = Roster::new(5);
    let notice = settle_fetch(&mut roster, directory.fetch_all().await);
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.action, Action::Fetch);
    assert_eq!(notice.message, "Users loaded.");
    roster
}

#[tokio::test]
async fn startup_fetch_maps_remote_names() {
    let directory = MemoryDirectory::with_users([remote(1, "John Doe"), remote(2, "Madonna")]);
    let roster = started(&directory).await;

    let john = roster.get(UserId(1)).unwrap();
    assert_eq!(john.first_name, "John");
    assert_eq!(john.last_name, "Doe");
    assert_eq!(john.department, "N/A");
    assert_eq!(roster.get(UserId(2)).unwrap().last_name, "");
}

#[tokio::test]
async fn failed_fetch_leaves_roster_empty() {
    let directory = MemoryDirectory::seeded();
    directory.fail_with(Action::Fetch, 503);

    let mut roster = Roster::new(5);
    let notice = settle_fetch(&mut roster, directory.fetch_all().await);

    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Failed to fetch users. Please try again later.");
    assert!(roster.users().is_empty());
}

#[tokio::test]
async fn invalid_form_never_reaches_the_directory() {
    let directory = MemoryDirectory::seeded();
    let mut roster = started(&directory).await;
    fill(&mut roster, "Ada", "Lovelace", "ada-at-example", "Research");

    let err = roster.submit().unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid email address.");
    assert_eq!(directory.calls(Action::Create), 0);
    assert_eq!(directory.calls(Action::Update), 0);
}

#[tokio::test]
async fn failed_create_keeps_list_and_form() {
    let directory = MemoryDirectory::seeded();
    let mut roster = started(&directory).await;
    fill(&mut roster, "Ada", "Lovelace", "ada@example.com", "Research");
    let users_before = roster.users().to_vec();
    let form_before = roster.form().clone();
    directory.fail_with(Action::Create, 500);

    let submission = roster.submit().unwrap();
    let outcome = send(&directory, &submission).await;
    let notice = settle_submission(&mut roster, submission, outcome);

    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.action, Action::Create);
    assert_eq!(notice.message, "Failed to add user. Please try again.");
    assert_eq!(roster.users(), users_before.as_slice());
    assert_eq!(roster.form(), &form_before);
    assert_eq!(directory.user_count(), 7);
}

#[tokio::test]
async fn created_record_round_trips_through_the_directory() {
    let directory = MemoryDirectory::new();
    let mut roster = started(&directory).await;
    fill(&mut roster, "Ada", "Lovelace", "ada@example.com", "Research");

    let submission = roster.submit().unwrap();
    let outcome = send(&directory, &submission).await;
    let created = submission.record().clone();
    let notice = settle_submission(&mut roster, submission, outcome);
    assert_eq!(notice.message, "User added successfully!");
    assert_eq!(roster.users(), &[created.clone()]);
    assert_eq!(roster.form(), &UserForm::default());

    let fetched = directory.fetch_all().await.unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].id, created.id);
    assert_eq!(fetched[0].first_name, created.first_name);
    assert_eq!(fetched[0].last_name, created.last_name);
    assert_eq!(fetched[0].email, created.email);
    assert_eq!(fetched[0].department, "N/A");
}

#[tokio::test]
async fn edit_then_update_replaces_in_place() {
    let directory = MemoryDirectory::seeded();
    let mut roster = started(&directory).await;

    assert!(roster.begin_edit(UserId(3)));
    assert_eq!(roster.submit_label(), "Update User");
    roster.set_field(Field::Email, "clem@example.com".to_string());

    let submission = roster.submit().unwrap();
    let outcome = send(&directory, &submission).await;
    let notice = settle_submission(&mut roster, submission, outcome);

    assert_eq!(notice.message, "User updated successfully!");
    assert_eq!(roster.mode(), Mode::Idle);
    assert_eq!(roster.users()[2].id, UserId(3));
    assert_eq!(roster.users()[2].email, "clem@example.com");
    let fetched = directory.fetch_all().await.unwrap();
    assert_eq!(fetched[2].email, "clem@example.com");
}

#[tokio::test]
async fn failed_update_stays_in_edit_mode() {
    let directory = MemoryDirectory::seeded();
    let mut roster = started(&directory).await;
    roster.begin_edit(UserId(2));
    roster.set_field(Field::Department, "Support".to_string());
    directory.fail_with(Action::Update, 500);

    let submission = roster.submit().unwrap();
    let outcome = send(&directory, &submission).await;
    let notice = settle_submission(&mut roster, submission, outcome);

    assert_eq!(notice.message, "Failed to update user. Please try again.");
    assert_eq!(roster.mode(), Mode::Editing(UserId(2)));
    assert_eq!(roster.form().department, "Support");
    assert_eq!(roster.get(UserId(2)).unwrap().department, "N/A");
}

#[tokio::test]
async fn deleting_twice_never_removes_another_record() {
    let directory = MemoryDirectory::seeded();
    let mut roster = started(&directory).await;

    let ticket = roster.begin_delete(UserId(4));
    let outcome = directory.delete(UserId(4)).await;
    let notice = settle_delete(&mut roster, ticket, outcome);
    assert_eq!(notice.message, "User deleted successfully!");

    let ticket = roster.begin_delete(UserId(4));
    let outcome = directory.delete(UserId(4)).await;
    let notice = settle_delete(&mut roster, ticket, outcome);
    assert_eq!(notice.message, "Failed to delete user. Please try again.");

    let ids: Vec<u64> = roster.users().iter().map(|u| u.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 5, 6, 7]);
    assert_eq!(directory.user_count(), 6);
}

#[tokio::test]
async fn twelve_users_page_through_in_fives() {
    let directory =
        MemoryDirectory::with_users((1..=12).map(|i| remote(i, &format!("User {i}"))));
    let mut roster = started(&directory).await;

    let first = roster.page();
    assert_eq!(first.records.len(), 5);
    assert!(!first.has_previous);

    roster.next_page();
    roster.next_page();
    let last = roster.page();
    let ids: Vec<u64> = last.records.iter().map(|u| u.id.0).collect();
    assert_eq!(ids, vec![11, 12]);
    assert!(!last.has_next);
}
