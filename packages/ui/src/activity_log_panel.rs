use dioxus::prelude::*;
use store::{Action, NoticeLevel};

use crate::activity_log::use_activity_log;
use crate::components::{Button, ButtonVariant};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

/// Drawer with the session's notices, filterable by action.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let filter = log().filter;
    let shown = log().shown();
    let total = log().len();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        aside {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Activity" }
                nav {
                    class: "activity-log-filters",
                    FilterChip {
                        label: "All".to_string(),
                        count: total,
                        active: filter.is_none(),
                        onselect: move |_| log.write().filter = None,
                    }
                    for action in Action::ALL {
                        FilterChip {
                            key: "{action.label()}",
                            label: action.label().to_string(),
                            count: log().count(action),
                            active: filter == Some(action),
                            onselect: move |_| log.write().filter = Some(action),
                        }
                    }
                }
                div {
                    class: "activity-log-header-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| log.write().clear(),
                        "Clear"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            ul {
                class: "activity-log-entries",
                if shown.is_empty() {
                    li { class: "activity-log-empty", "Nothing yet." }
                }
                for entry in shown {
                    li {
                        class: match entry.notice.level {
                            NoticeLevel::Error => "activity-log-entry error",
                            NoticeLevel::Success => "activity-log-entry success",
                        },
                        time { class: "activity-log-time", "{entry.clock()}" }
                        span { class: "activity-log-action", "{entry.notice.action.label()}" }
                        span { "{entry.notice.message}" }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterChip(label: String, count: usize, active: bool, onselect: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: if active { "activity-log-chip active" } else { "activity-log-chip" },
            onclick: move |_| onselect.call(()),
            "{label} {count}"
        }
    }
}

/// Header button opening the drawer; shows the failure count when there is one.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let failures = log().failures();

    rsx! {
        button {
            class: if failures > 0 { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            title: "Activity log",
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            if failures > 0 {
                "Log ({failures} failed)"
            } else {
                "Log"
            }
        }
    }
}
