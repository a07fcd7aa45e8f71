//! Glue between the roster and a [`UserDirectory`].
//!
//! The view cannot hold a borrow of its roster across an `await`, so each user
//! action is split in three: ask the roster what to do, run the remote call,
//! then hand the outcome to one of the `settle_*` functions. Those apply the
//! change only on success, log the cause and hand the ticket back on
//! failure, and return the notice to show.

use store::{Action, Notice, Roster, Submission, Ticket, UserRecord};
use tracing::error;

use crate::directory::UserDirectory;
use crate::error::RemoteError;

/// Run the remote half of a submit.
pub async fn send<D: UserDirectory>(
    directory: &D,
    submission: &Submission,
) -> Result<(), RemoteError> {
    match submission {
        Submission::Create { record, .. } => directory.create(record).await,
        Submission::Update { record, .. } => directory.update(record.id, record).await,
    }
}

/// Apply the startup fetch.
pub fn settle_fetch(
    roster: &mut Roster,
    outcome: Result<Vec<UserRecord>, RemoteError>,
) -> Notice {
    match outcome {
        Ok(users) => {
            roster.load(users);
            Notice::success(Action::Fetch)
        }
        Err(e) => {
            error!(error = %e, "failed to fetch users");
            Notice::failure(Action::Fetch)
        }
    }
}

/// Apply a settled create or update.
pub fn settle_submission(
    roster: &mut Roster,
    submission: Submission,
    outcome: Result<(), RemoteError>,
) -> Notice {
    let action = submission.ticket().action();
    if let Err(e) = outcome {
        error!(error = %e, id = %submission.ticket().id(), ?action, "remote call failed");
        roster.abandon(submission.ticket());
        return Notice::failure(action);
    }
    // A stale settlement still counts as accepted by the server.
    match submission {
        Submission::Create { ticket, record } => roster.commit_create(ticket, record),
        Submission::Update { ticket, record } => roster.commit_update(ticket, record),
    };
    Notice::success(action)
}

/// Apply a settled delete.
pub fn settle_delete(
    roster: &mut Roster,
    ticket: Ticket,
    outcome: Result<(), RemoteError>,
) -> Notice {
    if let Err(e) = outcome {
        error!(error = %e, id = %ticket.id(), "failed to delete user");
        roster.abandon(ticket);
        return Notice::failure(Action::Delete);
    }
    roster.commit_delete(ticket);
    Notice::success(Action::Delete)
}
