use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Previous/next controls under the table.
#[component]
pub fn Pager(
    page: usize,
    last_page: usize,
    has_previous: bool,
    has_next: bool,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let last_page = last_page.max(1);

    rsx! {
        div {
            class: "pager",
            Button {
                variant: ButtonVariant::Secondary,
                disabled: !has_previous,
                onclick: move |_| on_previous.call(()),
                "Previous"
            }
            span { class: "pager-status", "Page {page} of {last_page}" }
            Button {
                variant: ButtonVariant::Secondary,
                disabled: !has_next,
                onclick: move |_| on_next.call(()),
                "Next"
            }
        }
    }
}
