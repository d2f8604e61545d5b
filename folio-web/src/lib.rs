pub mod api;
pub mod cv_modal;
pub mod download;
pub mod pages;
pub mod scroll;
pub mod theme;

use dioxus::prelude::*;
use pages::{AppLayout, Home};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
