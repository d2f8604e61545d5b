//! Page section shells and cards
//!
//! Sections and cards render with their base class only; the reveal
//! observer in folio-web adds the `visible` class imperatively once the
//! element scrolls into view, so the classes here must stay static.

use dioxus::prelude::*;

/// A full-width page section with an anchor id
#[component]
pub fn Section(
    id: &'static str,
    #[props(default)] title: Option<&'static str>,
    children: Element,
) -> Element {
    rsx! {
        section { class: "section", id,
            div { class: "section-inner",
                if let Some(t) = title {
                    h2 { class: "section-title", "{t}" }
                }
                {children}
            }
        }
    }
}

/// A language proficiency row that slides in from one side
#[component]
pub fn SkillBox(name: String, level: String, from_right: bool) -> Element {
    let class = if from_right {
        "skill-box from-right"
    } else {
        "skill-box"
    };
    rsx! {
        div { class,
            span { class: "skill-box-name", "{name}" }
            span { class: "skill-box-level", "{level}" }
        }
    }
}

/// A single skill tile in the skills grid
#[component]
pub fn SkillCard(name: String, #[props(default)] detail: Option<String>) -> Element {
    rsx! {
        div { class: "skill-card",
            h3 { "{name}" }
            if let Some(d) = detail {
                p { "{d}" }
            }
        }
    }
}

/// A project tile with tags and an optional external link
#[component]
pub fn ProjectCard(
    title: String,
    description: String,
    tags: Vec<String>,
    #[props(default)] link: Option<String>,
) -> Element {
    rsx! {
        article { class: "project-card",
            h3 { "{title}" }
            p { "{description}" }
            div { class: "project-tags",
                for tag in tags.iter() {
                    span { key: "{tag}", class: "tag", "{tag}" }
                }
            }
            if let Some(url) = link {
                a {
                    class: "project-link",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener",
                    "View project"
                }
            }
        }
    }
}
