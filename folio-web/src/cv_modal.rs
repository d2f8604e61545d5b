//! CV download modal: DOM binding for the controller in folio-common.
//!
//! The pure state machine decides; this module executes: saving and
//! restoring focus, holding the focus-trap and Escape listeners while the
//! dialog is open (Some to attach, None to detach), and running the
//! existence-check-then-download flow.

use dioxus::prelude::*;
use folio_common::{DownloadRequest, ModalController};
use folio_ui::wasm_utils::DocumentEventListener;
use folio_ui::{Button, ButtonVariant, CvChoice, CvModalView, DownloadIcon, CV_MODAL_ID};
use wasm_bindgen::JsCast;

use crate::{api, download};

/// Matches the original tab order: anything natively focusable plus
/// explicit non-negative tabindexes.
const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

type Controller = ModalController<web_sys::HtmlElement>;

/// Listener pair held only while the dialog is open.
type ListenerSlot = Signal<Option<DocumentEventListener>>;

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

fn dialog_element(document: &web_sys::Document) -> Option<web_sys::Element> {
    document.get_element_by_id(CV_MODAL_ID)
}

fn first_focusable(dialog: &web_sys::Element) -> Option<web_sys::HtmlElement> {
    let nodes = dialog.query_selector_all(FOCUSABLE_SELECTOR).ok()?;
    nodes.item(0)?.dyn_into().ok()
}

fn cv_choices() -> Vec<CvChoice> {
    vec![
        CvChoice {
            label: "English".to_string(),
            flag: "\u{1F1EC}\u{1F1E7}".to_string(),
            path: "assets/cv_en.pdf".to_string(),
        },
        CvChoice {
            label: "日本語".to_string(),
            flag: "\u{1F1EF}\u{1F1F5}".to_string(),
            path: "assets/cv_jp.pdf".to_string(),
        },
    ]
}

/// The "Download CV" trigger button plus the modal it opens.
#[component]
pub fn CvDownloadSection() -> Element {
    let controller = use_signal(Controller::new);
    let is_open = use_signal(|| false);
    let downloading = use_signal(|| false);
    let trap: ListenerSlot = use_signal(|| None);
    let escape: ListenerSlot = use_signal(|| None);

    let on_download = move |path: String| {
        handle_download(path, controller, is_open, trap, escape, downloading);
    };

    rsx! {
        Button {
            variant: ButtonVariant::Primary,
            id: Some("download-cv-btn".to_string()),
            aria_expanded: Some(is_open()),
            onclick: move |_| open_modal(controller, is_open, trap, escape),
            DownloadIcon {}
            "Download CV"
        }
        CvModalView {
            is_open,
            choices: cv_choices(),
            downloading: downloading(),
            on_close: move |_| close_modal(controller, is_open, trap, escape),
            on_download,
        }
    }
}

fn open_modal(
    mut controller: Signal<Controller>,
    mut is_open: Signal<bool>,
    mut trap: ListenerSlot,
    mut escape: ListenerSlot,
) {
    let Some(document) = document() else {
        return;
    };

    let prev_focus = document
        .active_element()
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
    controller.write().open(prev_focus);
    is_open.set(true);

    // Focus trap: capture phase, since focus does not bubble. Any focus
    // landing outside the dialog subtree is halted and redirected to its
    // first focusable element.
    let trap_doc = document.clone();
    trap.set(Some(DocumentEventListener::new_capture(
        document.clone(),
        "focus",
        move |event| {
            let Some(dialog) = dialog_element(&trap_doc) else {
                return;
            };
            let inside = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .map(|n| dialog.contains(Some(&n)))
                .unwrap_or(false);
            if !controller.peek().should_redirect_focus(inside) {
                return;
            }
            event.stop_propagation();
            if let Some(first) = first_focusable(&dialog) {
                // focus() dispatches focus synchronously; defer it so this
                // capture listener is not re-entered mid-call.
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = first.focus();
                });
            }
        },
    )));

    escape.set(Some(DocumentEventListener::new(
        document,
        "keydown",
        move |event| {
            let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            if key_event.key() != "Escape" {
                return;
            }
            // Closing drops this listener's closure; defer so it is not
            // freed while still on the stack.
            wasm_bindgen_futures::spawn_local(async move {
                close_modal(controller, is_open, trap, escape);
            });
        },
    )));

    // The dialog subtree renders on the next frame; focus its first
    // control once it exists.
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(first) = dialog_element(&doc).as_ref().and_then(first_focusable) {
            let _ = first.focus();
        }
    });
}

/// Safe from any close path (button, overlay, backdrop, Escape) and
/// idempotent: a second call finds the controller already closed and the
/// listener slots already empty.
fn close_modal(
    mut controller: Signal<Controller>,
    mut is_open: Signal<bool>,
    mut trap: ListenerSlot,
    mut escape: ListenerSlot,
) {
    trap.set(None);
    escape.set(None);
    let restore = controller.write().close();
    is_open.set(false);
    if let Some(element) = restore {
        let _ = element.focus();
    }
}

/// Existence check, then either a direct download or a synthesized
/// placeholder. Whichever path runs, the dialog closes exactly once; a
/// completion that outlives its open cycle is dropped instead.
fn handle_download(
    path: String,
    controller: Signal<Controller>,
    is_open: Signal<bool>,
    trap: ListenerSlot,
    escape: ListenerSlot,
    mut downloading: Signal<bool>,
) {
    let Some(request) = DownloadRequest::parse(&path) else {
        return;
    };
    let stamp = controller.peek().stamp();
    downloading.set(true);

    spawn(async move {
        let exists = api::resource_exists(request.path()).await;
        let plan = request.resolve(exists);
        if controller.peek().accepts(stamp) {
            download::perform(&plan);
            close_modal(controller, is_open, trap, escape);
        } else {
            tracing::debug!("dropping stale CV download completion");
        }
        downloading.set(false);
    });
}
