use crate::api;
use crate::cv_modal::CvDownloadSection;
use crate::scroll::RevealObserver;
use dioxus::prelude::*;
use folio_common::{slides_from_right, ContactForm};
use folio_ui::{
    BannerKind, Button, ButtonVariant, FormBanner, ProjectCard, Section, SkillBox, SkillCard,
    SpinnerIcon, TextArea, TextInput,
};
use gloo_timers::future::TimeoutFuture;

/// How long a form status banner stays up.
const BANNER_MILLIS: u32 = 5_000;

#[component]
pub fn Home() -> Element {
    let mut observers = use_signal(Vec::<RevealObserver>::new);

    // Attach reveal observers after the first render, once the sections
    // exist in the DOM.
    use_effect(move || {
        if !observers.peek().is_empty() {
            return;
        }
        let mut attached = Vec::new();
        match RevealObserver::new(0.1, "0px 0px -100px 0px", "visible", false) {
            Ok(obs) => {
                obs.observe_all(".section");
                attached.push(obs);
            }
            Err(e) => tracing::warn!("section reveal disabled: {e}"),
        }
        match RevealObserver::new(0.1, "0px", "visible", true) {
            Ok(obs) => {
                obs.observe_with_stagger(".skill-card", 50);
                obs.observe_with_stagger(".project-card", 100);
                obs.observe_all(".skill-box");
                attached.push(obs);
            }
            Err(e) => tracing::warn!("card reveal disabled: {e}"),
        }
        observers.set(attached);
    });

    rsx! {
        Hero {}
        About {}
        Skills {}
        Projects {}
        Contact {}
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { class: "hero", id: "home",
            div { class: "hero-inner",
                h1 { class: "hero-title", "Daniel Ferrer" }
                p { class: "hero-subtitle", "Backend developer & systems tinkerer" }
                p { class: "hero-tagline",
                    "I build small, reliable services and the occasional web thing."
                }
            }
        }
    }
}

#[component]
fn About() -> Element {
    rsx! {
        Section { id: "about", title: "About",
            div { class: "about-grid",
                p {
                    "I'm a developer based in Valencia with a soft spot for "
                    "protocol plumbing, storage engines, and anything that "
                    "talks over a socket. Currently looking for my next role."
                }
                div { class: "about-actions", CvDownloadSection {} }
            }
        }
    }
}

#[component]
fn Skills() -> Element {
    let skills = [
        ("Rust", "Services, CLIs, WASM"),
        ("TypeScript", "Node and the browser"),
        ("PostgreSQL", "Schema design, tuning"),
        ("Linux", "Debugging in anger"),
        ("Docker", "Build and deploy"),
        ("Git", "Daily driver"),
    ];
    let languages = [
        ("Spanish", "Native"),
        ("English", "C1"),
        ("Japanese", "JLPT N2"),
    ];

    rsx! {
        Section { id: "skills", title: "Skills",
            div { class: "skills-grid",
                for (name, detail) in skills {
                    SkillCard {
                        key: "{name}",
                        name: "{name}",
                        detail: Some(detail.to_string()),
                    }
                }
            }
            h3 { class: "skills-subtitle", "Languages" }
            div { class: "skill-boxes",
                for (i, (name, level)) in languages.into_iter().enumerate() {
                    SkillBox {
                        key: "{name}",
                        name: "{name}",
                        level: "{level}",
                        from_right: slides_from_right(i),
                    }
                }
            }
        }
    }
}

#[component]
fn Projects() -> Element {
    rsx! {
        Section { id: "projects", title: "Projects",
            div { class: "projects-grid",
                ProjectCard {
                    title: "quaynote",
                    description: "Self-hosted bookmarking service with full-text search.",
                    tags: vec!["Rust".to_string(), "axum".to_string(), "SQLite".to_string()],
                    link: Some("https://github.com/dferrer/quaynote".to_string()),
                }
                ProjectCard {
                    title: "mitelink",
                    description: "Bridge between a legacy PBX and modern webhooks.",
                    tags: vec!["Rust".to_string(), "tokio".to_string()],
                }
                ProjectCard {
                    title: "this site",
                    description: "Portfolio built with Dioxus, compiled to WebAssembly.",
                    tags: vec!["Rust".to_string(), "Dioxus".to_string(), "WASM".to_string()],
                }
            }
        }
    }
}

#[component]
fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let banner = use_signal(|| None::<(BannerKind, String)>);
    let banner_epoch = use_signal(|| 0u64);

    let on_submit = move |e: Event<FormData>| {
        e.prevent_default();

        let form = ContactForm {
            name: name(),
            email: email(),
            message: message(),
        };

        if let Err(err) = form.validate() {
            flash_banner(banner, banner_epoch, BannerKind::Error, err.to_string());
            return;
        }
        if !api::email_configured() {
            flash_banner(
                banner,
                banner_epoch,
                BannerKind::Error,
                "Contact form is not configured. Please email me directly.",
            );
            return;
        }

        sending.set(true);
        spawn(async move {
            match api::send_contact_email(&form).await {
                Ok(()) => {
                    flash_banner(
                        banner,
                        banner_epoch,
                        BannerKind::Success,
                        "Message sent successfully! I will get back to you soon.",
                    );
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                Err(e) => {
                    tracing::warn!("contact send failed: {e}");
                    flash_banner(
                        banner,
                        banner_epoch,
                        BannerKind::Error,
                        "There was an error sending your message. Please try again \
                         or contact me directly by email.",
                    );
                }
            }
            sending.set(false);
        });
    };

    rsx! {
        Section { id: "contact", title: "Contact",
            form { class: "contact-form", id: "contact-form", onsubmit: on_submit,
                TextInput {
                    id: Some("name".to_string()),
                    value: name(),
                    placeholder: "Your name",
                    disabled: sending(),
                    on_input: move |v| name.set(v),
                }
                TextInput {
                    id: Some("email".to_string()),
                    r#type: Some("email"),
                    value: email(),
                    placeholder: "Your email",
                    disabled: sending(),
                    on_input: move |v| email.set(v),
                }
                TextArea {
                    id: Some("message".to_string()),
                    value: message(),
                    placeholder: "Your message",
                    disabled: sending(),
                    on_input: move |v| message.set(v),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: Some("submit"),
                    loading: sending(),
                    onclick: |_| {},
                    if sending() {
                        SpinnerIcon {}
                        "Sending..."
                    } else {
                        "Send message"
                    }
                }
                if let Some((kind, text)) = banner() {
                    FormBanner { kind, message: text }
                }
            }
        }
    }
}

/// Show a banner and hide it after [`BANNER_MILLIS`], unless a newer
/// banner replaced it in the meantime.
fn flash_banner(
    mut banner: Signal<Option<(BannerKind, String)>>,
    mut epoch: Signal<u64>,
    kind: BannerKind,
    text: impl Into<String>,
) {
    banner.set(Some((kind, text.into())));
    let stamp = *epoch.peek() + 1;
    epoch.set(stamp);
    spawn(async move {
        TimeoutFuture::new(BANNER_MILLIS).await;
        if *epoch.peek() == stamp {
            banner.set(None);
        }
    });
}
