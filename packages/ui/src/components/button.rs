use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Destructive,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button-primary",
            ButtonVariant::Secondary => "button button-secondary",
            ButtonVariant::Success => "button button-success",
            ButtonVariant::Destructive => "button button-destructive",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default, into)] class: String,
    #[props(default = "button".to_string(), into)] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default, into)] title: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: r#type.clone(),
            disabled: disabled,
            title: "{title}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
