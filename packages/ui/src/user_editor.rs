use dioxus::prelude::*;
use store::{Field, UserForm};

use crate::components::{Button, ButtonVariant, Input};

/// Create/update form for a single user.
#[component]
pub fn UserEditor(
    form: UserForm,
    #[props(into)] submit_label: String,
    on_input: EventHandler<(Field, String)>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "user-editor",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            div {
                class: "user-editor-grid",
                for field in Field::ALL {
                    Input {
                        key: "{field:?}",
                        name: field.label(),
                        r#type: field.input_type(),
                        placeholder: field.label(),
                        value: form.get(field).to_string(),
                        oninput: move |evt: FormEvent| on_input.call((field, evt.value())),
                    }
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                class: "user-editor-submit",
                r#type: "submit",
                "{submit_label}"
            }
        }
    }
}
