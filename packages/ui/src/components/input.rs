use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(into)] name: String,
    #[props(default = "text".to_string(), into)] r#type: String,
    #[props(default, into)] placeholder: String,
    #[props(into)] value: String,
    #[props(default, into)] class: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            name: "{name}",
            r#type: r#type.clone(),
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
