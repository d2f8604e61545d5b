//! Scroll glue: smooth anchor scrolling, the navbar scrollspy listener,
//! and IntersectionObserver-driven reveal animations.

use dioxus::prelude::*;
use folio_common::scrollspy::{self, active_section, navbar_elevated, SectionBounds};
use folio_ui::wasm_utils::WindowEventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smooth-scroll to a section, compensating for the fixed navbar height.
pub fn scroll_to_section(section_id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(target) = document
        .get_element_by_id(section_id)
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };

    let navbar_height = document
        .get_element_by_id("navbar")
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|n| n.offset_height() as f64)
        .unwrap_or(0.0);

    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(scrollspy::anchor_target_y(
        target.offset_top() as f64,
        navbar_height,
    ));
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Measure every `section[id]` in document order.
fn measure_sections(document: &web_sys::Document) -> Vec<SectionBounds> {
    let mut out = Vec::new();
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return out;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        out.push(SectionBounds {
            id: el.id(),
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        });
    }
    out
}

/// Attach the scroll listener that drives the navbar shadow and the active
/// nav link. Keep the returned listener alive for as long as the navbar is
/// mounted; dropping it detaches.
pub fn spy_listener(
    mut elevated: Signal<bool>,
    mut active: Signal<Option<String>>,
) -> Option<WindowEventListener> {
    let window = web_sys::window()?;
    Some(WindowEventListener::new(window, "scroll", move |_| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let y = current_scroll_y();

        let shadow = navbar_elevated(y);
        if *elevated.peek() != shadow {
            elevated.set(shadow);
        }

        // Remeasure on every event: section offsets move as images load
        // and reveal animations run.
        let sections = measure_sections(&document);
        let current = active_section(&sections, y).map(str::to_string);
        if *active.peek() != current {
            active.set(current);
        }
    }))
}

type RevealCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Adds a class to observed elements once they intersect the viewport.
///
/// Disconnects on drop, so reveal observers live in component state and
/// die with the page.
pub struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _callback: RevealCallback,
}

impl RevealObserver {
    /// `once` stops observing an element after its first reveal.
    pub fn new(
        threshold: f64,
        root_margin: &str,
        class_name: &'static str,
        once: bool,
    ) -> Result<Self, String> {
        let callback: RevealCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let _ = target.class_list().add_1(class_name);
                    if once {
                        observer.unobserve(&target);
                    }
                }
            },
        ));

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);

        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(|e| format!("Failed to create IntersectionObserver: {e:?}"))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Observe every element matching `selector`.
    pub fn observe_all(&self, selector: &str) {
        self.observe_with_stagger(selector, 0);
    }

    /// Observe every element matching `selector`, delaying each one's
    /// reveal transition by `step_ms` times its index in the group.
    pub fn observe_with_stagger(&self, selector: &str, step_ms: u32) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(nodes) = document.query_selector_all(selector) else {
            return;
        };
        for i in 0..nodes.length() {
            let Some(el) = nodes
                .item(i)
                .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
            else {
                continue;
            };
            if step_ms > 0 {
                let delay = folio_common::reveal::stagger_delay_ms(i as usize, step_ms);
                let _ = el.set_attribute("style", &format!("transition-delay:{delay}ms"));
            }
            self.observer.observe(&el);
        }
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
