//! folio-ui - View components for the folio site
//!
//! Pure, props-based Dioxus components plus the browser listener utility.
//! Components take data in and emit events out; all wiring lives in
//! folio-web.

pub mod components;
pub mod wasm_utils;

pub use components::*;
