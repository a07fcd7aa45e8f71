//! The single view: form, table and pager over one [`Roster`].
//!
//! Every handler follows the same shape: change the roster synchronously
//! (validate, issue a ticket), run the remote call in a spawned task, then
//! settle the outcome back into the roster and notify. Nothing is cancelled,
//! so a call keeps running even if the user moves on.

use api::actions::{send, settle_delete, settle_fetch, settle_submission};
use api::{Directory, UserDirectory};
use dioxus::prelude::*;
use store::{Field, Notice, PageView, Roster, RosterConfig, UserId};
use tracing::{debug, warn};

use crate::activity_log::{log_notice, use_activity_log};
use crate::notifier::use_notifier;
use crate::{ActivityLogPanel, ActivityLogToggle, Pager, UserEditor, UserTable};

const ROSTER_CSS: Asset = asset!("/assets/styling/roster.css");

/// Needs `RosterConfig` and `Directory` contexts above it.
#[component]
pub fn UserManagement() -> Element {
    let config = use_context::<RosterConfig>();
    let directory = use_context::<Directory>();
    let notify = use_notifier();
    let mut activity_log = use_activity_log();
    let mut roster = use_signal(move || Roster::new(config.table.page_size));

    // Fetch once on mount
    let _loader = use_resource({
        let directory = directory.clone();
        move || {
            let directory = directory.clone();
            async move {
                let outcome = directory.fetch_all().await;
                let notice = settle_fetch(&mut roster.write(), outcome);
                // A successful load is not worth a toast.
                if notice.is_error() {
                    notify.call(notice);
                } else {
                    log_notice(&mut activity_log, &notice);
                }
            }
        }
    });

    let on_input = move |(field, value): (Field, String)| {
        roster.write().set_field(field, value);
    };

    let on_submit = {
        let directory = directory.clone();
        move |_: ()| {
            let result = roster.write().submit();
            let submission = match result {
                Ok(submission) => submission,
                Err(e) => {
                    let action = roster.peek().pending_action();
                    debug!(?action, error = %e, "submit rejected");
                    notify.call(Notice::rejected(action, e));
                    return;
                }
            };
            let directory = directory.clone();
            spawn(async move {
                let outcome = send(&directory, &submission).await;
                let notice = settle_submission(&mut roster.write(), submission, outcome);
                notify.call(notice);
            });
        }
    };

    let on_edit = move |id: UserId| {
        if roster.write().begin_edit(id) {
            debug!(%id, "editing user");
        } else {
            warn!(%id, "edit requested for a user that is no longer listed");
        }
    };

    let on_delete = {
        let directory = directory.clone();
        move |id: UserId| {
            let ticket = roster.write().begin_delete(id);
            let directory = directory.clone();
            spawn(async move {
                let outcome = directory.delete(id).await;
                let notice = settle_delete(&mut roster.write(), ticket, outcome);
                notify.call(notice);
            });
        }
    };

    let PageView {
        records,
        page,
        last_page,
        has_previous,
        has_next,
    } = roster.read().page();
    let form = roster.read().form().clone();
    let submit_label = roster.read().submit_label();

    rsx! {
        document::Stylesheet { href: ROSTER_CSS }

        div {
            class: "roster",
            header {
                class: "roster-header",
                h1 { "User Management" }
                ActivityLogToggle {}
            }

            UserEditor {
                form: form,
                submit_label: submit_label,
                on_input: on_input,
                on_submit: on_submit,
            }

            section {
                class: "roster-list",
                h2 { "User List" }
                UserTable {
                    records: records,
                    on_edit: on_edit,
                    on_delete: on_delete,
                }
                Pager {
                    page: page,
                    last_page: last_page,
                    has_previous: has_previous,
                    has_next: has_next,
                    on_previous: move |_| {
                        roster.write().prev_page();
                        debug!(page = roster.peek().page_number(), "previous page");
                    },
                    on_next: move |_| {
                        roster.write().next_page();
                        debug!(page = roster.peek().page_number(), "next page");
                    },
                }
            }

            ActivityLogPanel {}
        }
    }
}
