//! Reusable text input components

use dioxus::prelude::*;

/// Single-line text input with consistent styling
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] id: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        input {
            class: "text-field",
            id: id.as_deref(),
            r#type: r#type.unwrap_or("text"),
            value: "{value}",
            placeholder,
            disabled,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}

/// Multi-line text input with consistent styling
#[component]
pub fn TextArea(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] id: Option<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default = 5)] rows: u32,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        textarea {
            class: "text-field",
            id: id.as_deref(),
            rows: "{rows}",
            value: "{value}",
            placeholder,
            disabled,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
