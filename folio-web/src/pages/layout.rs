use crate::{scroll, theme, Route};
use dioxus::prelude::*;
use folio_ui::{NavBarView, NavLink};

const SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[component]
pub fn AppLayout() -> Element {
    let mut theme_pref = use_signal(theme::load_theme);
    use_effect(move || theme::apply_theme(theme_pref()));

    let mut menu_open = use_signal(|| false);
    let elevated = use_signal(|| false);
    let active = use_signal(|| None::<String>);

    // Scrollspy listener lives as long as the layout; dropping the signal
    // on unmount detaches it.
    let _spy = use_signal(|| scroll::spy_listener(elevated, active));

    let links: Vec<NavLink> = SECTIONS
        .iter()
        .map(|&(id, label)| NavLink {
            section_id: id.to_string(),
            label: label.to_string(),
            is_active: active().as_deref() == Some(id),
        })
        .collect();

    rsx! {
        NavBarView {
            brand: "Daniel Ferrer",
            links,
            on_link_click: move |section_id: String| {
                menu_open.set(false);
                scroll::scroll_to_section(&section_id);
            },
            menu_open,
            on_menu_toggle: move |_| {
                let open = menu_open();
                menu_open.set(!open);
            },
            theme: theme_pref(),
            on_theme_toggle: move |_| {
                let next = theme_pref().toggled();
                theme_pref.set(next);
                theme::store_theme(next);
            },
            elevated: elevated(),
        }
        main { Outlet::<Route> {} }
        footer { class: "site-footer",
            p { "© 2026 Daniel Ferrer" }
        }
    }
}
