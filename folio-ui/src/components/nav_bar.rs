//! Navbar view component
//!
//! Pure, props-based fixed navbar: brand, section links, theme toggle, and
//! the mobile hamburger menu. All state lives with the caller.

use crate::components::icons::{MenuIcon, MoonIcon, SunIcon, XIcon};
use crate::components::ChromelessButton;
use dioxus::prelude::*;
use folio_common::Theme;

/// One section link in the navbar
#[derive(Clone, PartialEq)]
pub struct NavLink {
    /// Id of the target `section` element
    pub section_id: String,
    pub label: String,
    pub is_active: bool,
}

/// Navbar view (pure, props-based)
#[component]
pub fn NavBarView(
    brand: String,
    links: Vec<NavLink>,
    /// Section id of the activated link
    on_link_click: EventHandler<String>,
    menu_open: ReadSignal<bool>,
    on_menu_toggle: EventHandler<()>,
    theme: Theme,
    on_theme_toggle: EventHandler<()>,
    /// Shadow once the page is scrolled
    elevated: bool,
) -> Element {
    let navbar_class = if elevated { "navbar elevated" } else { "navbar" };
    let menu_class = if menu_open() { "nav-menu open" } else { "nav-menu" };

    rsx! {
        nav { class: navbar_class, id: "navbar",
            div { class: "nav-inner",
                a {
                    class: "nav-brand",
                    href: "#home",
                    onclick: move |e| {
                        e.prevent_default();
                        on_link_click.call("home".to_string());
                    },
                    "{brand}"
                }

                ul { class: menu_class,
                    for link in links.iter() {
                        li { key: "{link.section_id}",
                            a {
                                class: if link.is_active { "nav-link active" } else { "nav-link" },
                                href: "#{link.section_id}",
                                onclick: {
                                    let id = link.section_id.clone();
                                    move |e: Event<MouseData>| {
                                        e.prevent_default();
                                        on_link_click.call(id.clone());
                                    }
                                },
                                "{link.label}"
                            }
                        }
                    }
                }

                div { class: "nav-actions",
                    ChromelessButton {
                        id: Some("theme-toggle".to_string()),
                        class: Some("icon-button".to_string()),
                        aria_label: Some("Toggle theme".to_string()),
                        onclick: move |_| on_theme_toggle.call(()),
                        if theme.is_light() {
                            SunIcon {}
                        } else {
                            MoonIcon {}
                        }
                    }
                    ChromelessButton {
                        class: Some("icon-button nav-toggle".to_string()),
                        aria_label: Some("Toggle navigation".to_string()),
                        aria_expanded: Some(menu_open()),
                        onclick: move |_| on_menu_toggle.call(()),
                        if menu_open() {
                            XIcon {}
                        } else {
                            MenuIcon {}
                        }
                    }
                }
            }
        }
    }
}
