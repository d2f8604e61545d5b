//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base behavior
/// without visual styling. Used internally by Button and for special cases
/// (nav toggles, modal close, flag buttons).
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_expanded: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            id: id.as_deref(),
            r#type,
            disabled: is_disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if is_disabled { Some("true") } else { None },
            aria_expanded: aria_expanded.map(|v| if v { "true" } else { "false" }),
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Accent background - for primary actions
    Primary,
    /// Transparent with border - for secondary actions
    Secondary,
    /// No chrome - text only with hover
    Ghost,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] id: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] aria_expanded: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Secondary => "btn btn-secondary",
        ButtonVariant::Ghost => "btn btn-ghost",
    };

    let computed_class = match &class {
        Some(extra) => format!("{variant_class} {extra}"),
        None => variant_class.to_string(),
    };

    rsx! {
        ChromelessButton {
            id,
            disabled,
            loading,
            r#type,
            aria_expanded,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}
