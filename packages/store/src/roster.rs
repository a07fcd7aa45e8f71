//! # Roster: the single owner of client state
//!
//! [`Roster`] holds everything the view renders: the cached list of
//! [`UserRecord`]s, the [`UserForm`] draft, the editing marker and the page
//! cursor. The view keeps one `Roster` in a signal and changes it only through
//! the methods below, so the table and form invariants can be checked in
//! plain unit tests.
//!
//! ## Form state machine
//!
//! | From | Operation | To |
//! |------|-----------|----|
//! | Idle / Editing | [`begin_edit`](Roster::begin_edit) | Editing(id), form = row |
//! | Idle | [`commit_create`](Roster::commit_create) | Idle, form cleared |
//! | Editing(id) | [`commit_create`](Roster::commit_create) | unchanged, draft kept |
//! | Editing(id) | [`commit_update`](Roster::commit_update) | Idle, form cleared |
//! | any | [`submit`](Roster::submit) fails validation | unchanged |
//!
//! A failed remote call only hands its ticket back, so the list and the form
//! stay as they were.
//!
//! ## Settlement order
//!
//! Remote calls can settle in any order. [`submit`](Roster::submit) and
//! [`begin_delete`](Roster::begin_delete) hand out a [`Ticket`] with a
//! strictly increasing sequence number. When a commit arrives with a ticket
//! older than the newest one already applied to the same id, it is reported as
//! [`Settled::Stale`] and the list is left alone. Different ids are never
//! ordered against each other. A call that fails is handed back with
//! [`abandon`](Roster::abandon); once an id has no ticket in flight its
//! fencing entry is dropped.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::ids::IdGenerator;
use crate::models::{Field, UserForm, UserId, UserRecord};
use crate::notice::Action;
use crate::page::PageWindow;
use crate::validate::{validate, ValidationError};

/// Whether the form creates a new record or updates an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Editing(UserId),
}

/// Receipt for a remote call that has been issued but not yet settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    id: UserId,
    action: Action,
}

impl Ticket {
    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn action(&self) -> Action {
        self.action
    }
}

/// What a valid submit asks the remote directory to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Create { ticket: Ticket, record: UserRecord },
    Update { ticket: Ticket, record: UserRecord },
}

impl Submission {
    pub fn ticket(&self) -> Ticket {
        match self {
            Submission::Create { ticket, .. } | Submission::Update { ticket, .. } => *ticket,
        }
    }

    pub fn record(&self) -> &UserRecord {
        match self {
            Submission::Create { record, .. } | Submission::Update { record, .. } => record,
        }
    }
}

/// Outcome of applying a settled remote call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    Applied,
    /// A newer call for the same id already applied; the list was not touched.
    Stale,
}

/// The rows of the current table page and the state of the pager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    pub records: Vec<UserRecord>,
    pub page: usize,
    pub last_page: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Clone, Debug)]
pub struct Roster {
    users: Vec<UserRecord>,
    form: UserForm,
    editing: Option<UserId>,
    page: usize,
    page_size: usize,
    ids: IdGenerator,
    issued: u64,
    in_flight: HashMap<UserId, usize>,
    applied: HashMap<UserId, u64>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(crate::page::DEFAULT_PAGE_SIZE)
    }
}

impl Roster {
    pub fn new(page_size: usize) -> Self {
        Self {
            users: Vec::new(),
            form: UserForm::default(),
            editing: None,
            page: 1,
            page_size: page_size.max(1),
            ids: IdGenerator::new(),
            issued: 0,
            in_flight: HashMap::new(),
            applied: HashMap::new(),
        }
    }

    /// Replace the cached list with the result of the startup fetch.
    pub fn load(&mut self, users: Vec<UserRecord>) {
        for user in &users {
            self.ids.observe(user.id);
        }
        info!(count = users.len(), "loaded users");
        self.users = users;
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn get(&self, id: UserId) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    pub fn mode(&self) -> Mode {
        match self.editing {
            Some(id) => Mode::Editing(id),
            None => Mode::Idle,
        }
    }

    /// What a submit would do right now.
    pub fn pending_action(&self) -> Action {
        match self.mode() {
            Mode::Idle => Action::Create,
            Mode::Editing(_) => Action::Update,
        }
    }

    /// Label of the form's submit button.
    pub fn submit_label(&self) -> &'static str {
        match self.pending_action() {
            Action::Update => "Update User",
            _ => "Add User",
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    /// Load a row into the form and switch to update mode.
    ///
    /// Returns `false`, changing nothing, when no row has that id.
    pub fn begin_edit(&mut self, id: UserId) -> bool {
        let Some(record) = self.get(id) else {
            return false;
        };
        self.form = UserForm::from(record);
        self.editing = Some(id);
        true
    }

    /// Validate the form and describe the remote call to make.
    ///
    /// Nothing changes on validation failure, so the entered values stay in
    /// the form.
    pub fn submit(&mut self) -> Result<Submission, ValidationError> {
        validate(&self.form)?;
        let submission = match self.editing {
            Some(id) => Submission::Update {
                ticket: self.issue(id, Action::Update),
                record: self.form.to_record(id),
            },
            None => {
                let id = self.ids.next_id();
                Submission::Create {
                    ticket: self.issue(id, Action::Create),
                    record: self.form.to_record(id),
                }
            }
        };
        Ok(submission)
    }

    /// Issue a ticket for deleting `id`. Independent of the form.
    pub fn begin_delete(&mut self, id: UserId) -> Ticket {
        self.issue(id, Action::Delete)
    }

    /// Apply a create the remote directory accepted.
    pub fn commit_create(&mut self, ticket: Ticket, record: UserRecord) -> Settled {
        if self.editing.is_none() {
            self.form = UserForm::default();
        }
        if !self.settle(ticket) {
            return Settled::Stale;
        }
        self.ids.observe(record.id);
        info!(id = %record.id, "added user");
        self.users.push(record);
        Settled::Applied
    }

    /// Apply an update the remote directory accepted.
    pub fn commit_update(&mut self, ticket: Ticket, record: UserRecord) -> Settled {
        if self.editing == Some(ticket.id) {
            self.editing = None;
            self.form = UserForm::default();
        }
        if !self.settle(ticket) {
            return Settled::Stale;
        }
        if let Some(existing) = self.users.iter_mut().find(|u| u.id == ticket.id) {
            *existing = record;
            info!(id = %ticket.id, "updated user");
        }
        Settled::Applied
    }

    /// Apply a delete the remote directory accepted.
    pub fn commit_delete(&mut self, ticket: Ticket) -> Settled {
        if !self.settle(ticket) {
            return Settled::Stale;
        }
        let before = self.users.len();
        self.users.retain(|u| u.id != ticket.id);
        if self.users.len() < before {
            info!(id = %ticket.id, "deleted user");
        }
        Settled::Applied
    }

    pub fn page_number(&self) -> usize {
        self.page
    }

    fn window(&self) -> PageWindow {
        PageWindow::new(self.users.len(), self.page_size, self.page)
    }

    pub fn next_page(&mut self) {
        self.page = self.window().next();
    }

    pub fn prev_page(&mut self) {
        self.page = self.window().previous();
    }

    pub fn page(&self) -> PageView {
        let window = self.window();
        PageView {
            records: window.slice(&self.users).to_vec(),
            page: window.page,
            last_page: window.last_page(),
            has_previous: window.has_previous(),
            has_next: window.has_next(),
        }
    }

    /// Give back the ticket of a remote call that failed. Nothing else changes.
    pub fn abandon(&mut self, ticket: Ticket) {
        self.release(ticket.id);
    }

    fn issue(&mut self, id: UserId, action: Action) -> Ticket {
        *self.in_flight.entry(id).or_insert(0) += 1;
        self.issued += 1;
        Ticket {
            seq: self.issued,
            id,
            action,
        }
    }

    /// Record `ticket` as applied unless a newer one for its id already was.
    fn settle(&mut self, ticket: Ticket) -> bool {
        let newest = self.applied.entry(ticket.id).or_insert(0);
        let fresh = *newest <= ticket.seq;
        if fresh {
            *newest = ticket.seq;
        } else {
            warn!(
                id = %ticket.id,
                action = ?ticket.action,
                "ignoring stale settlement"
            );
        }
        self.release(ticket.id);
        fresh
    }

    /// Future tickets always outrank past ones, so an id with nothing in
    /// flight needs no fencing entry.
    fn release(&mut self, id: UserId) {
        let Some(count) = self.in_flight.get_mut(&id) else {
            return;
        };
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.in_flight.remove(&id);
            self.applied.remove(&id);
        }
    }
}
