//! Contact form status banner

use crate::components::icons::{AlertTriangleIcon, CheckIcon};
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BannerKind {
    Success,
    Error,
}

/// Inline status line shown under the contact form after a submission
/// attempt. The caller decides when it appears and disappears.
#[component]
pub fn FormBanner(kind: BannerKind, message: String) -> Element {
    let (class, icon) = match kind {
        BannerKind::Success => ("form-message success", rsx! { CheckIcon {} }),
        BannerKind::Error => ("form-message error", rsx! { AlertTriangleIcon {} }),
    };

    rsx! {
        div { class, role: "status",
            {icon}
            span { "{message}" }
        }
    }
}
