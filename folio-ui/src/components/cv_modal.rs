//! CV download modal view
//!
//! Pure, props-based dialog. The controller in folio-web owns the
//! open/close state machine, the focus trap, and the download flow; this
//! component only renders and reports clicks.
//!
//! Click geometry: a click anywhere on the backdrop (the outer fixed
//! container or the overlay) closes; clicks inside the content panel stop
//! propagation so they never reach the backdrop.

use crate::components::icons::{DownloadIcon, SpinnerIcon, XIcon};
use crate::components::ChromelessButton;
use dioxus::prelude::*;

/// Element id of the dialog subtree, used by the focus trap to decide
/// whether a focus target is inside the modal.
pub const CV_MODAL_ID: &str = "cv-modal";

/// One downloadable CV variant offered in the modal
#[derive(Clone, PartialEq)]
pub struct CvChoice {
    pub label: String,
    /// Flag emoji shown on the button
    pub flag: String,
    /// Path of the file to request, e.g. `assets/cv_en.pdf`
    pub path: String,
}

/// CV modal view (pure, props-based)
#[component]
pub fn CvModalView(
    is_open: ReadSignal<bool>,
    choices: Vec<CvChoice>,
    /// A download attempt is in flight
    downloading: bool,
    on_close: EventHandler<()>,
    /// Path of the chosen CV file
    on_download: EventHandler<String>,
) -> Element {
    if !is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            id: CV_MODAL_ID,
            class: "modal",
            role: "dialog",
            "aria-modal": "true",
            aria_label: "Download CV",
            onclick: move |_| on_close.call(()),

            div { class: "modal-overlay" }

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { "Download CV" }
                    ChromelessButton {
                        class: Some("icon-button modal-close".to_string()),
                        aria_label: Some("Close".to_string()),
                        onclick: move |_| on_close.call(()),
                        XIcon {}
                    }
                }

                p { class: "modal-text", "Choose a language:" }

                div { class: "flag-buttons",
                    for choice in choices.iter() {
                        ChromelessButton {
                            key: "{choice.path}",
                            class: Some("flag-btn".to_string()),
                            disabled: downloading,
                            onclick: {
                                let path = choice.path.clone();
                                move |_| on_download.call(path.clone())
                            },
                            span { class: "flag", "{choice.flag}" }
                            span { "{choice.label}" }
                            if downloading {
                                SpinnerIcon {}
                            } else {
                                DownloadIcon {}
                            }
                        }
                    }
                }
            }
        }
    }
}
