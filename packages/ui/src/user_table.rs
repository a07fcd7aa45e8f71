use dioxus::prelude::*;
use store::{UserId, UserRecord};

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaPenToSquare, FaTrashCan};
use crate::Icon;

const HEADINGS: [&str; 6] = ["ID", "First Name", "Last Name", "Email", "Department", "Actions"];

/// One page of users with per-row edit and delete actions.
#[component]
pub fn UserTable(
    records: Vec<UserRecord>,
    on_edit: EventHandler<UserId>,
    on_delete: EventHandler<UserId>,
) -> Element {
    rsx! {
        table {
            class: "user-table",
            thead {
                tr {
                    for heading in HEADINGS {
                        th { "{heading}" }
                    }
                }
            }
            tbody {
                if records.is_empty() {
                    tr {
                        td { class: "user-table-empty", colspan: "6", "No users to show." }
                    }
                }
                for user in records.iter() {
                    UserRow {
                        key: "{user.id}",
                        user: user.clone(),
                        on_edit: on_edit,
                        on_delete: on_delete,
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(
    user: UserRecord,
    on_edit: EventHandler<UserId>,
    on_delete: EventHandler<UserId>,
) -> Element {
    let id = user.id;

    rsx! {
        tr {
            td { "{user.id}" }
            td { "{user.first_name}" }
            td { "{user.last_name}" }
            td { "{user.email}" }
            td { "{user.department}" }
            td {
                class: "user-table-actions",
                Button {
                    variant: ButtonVariant::Success,
                    title: "Edit user",
                    onclick: move |_| on_edit.call(id),
                    Icon { icon: FaPenToSquare, width: 12, height: 12 }
                    " Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    title: "Delete user",
                    onclick: move |_| on_delete.call(id),
                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                    " Delete"
                }
            }
        }
    }
}
