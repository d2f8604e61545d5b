//! folio-common - Pure domain logic for the folio site
//!
//! Everything in here is I/O-free and runs on any target, so the interesting
//! behavior (modal lifecycle, download policy, form validation, scrollspy
//! math) is testable natively without a browser.

pub mod contact;
pub mod download;
pub mod modal;
pub mod reveal;
pub mod scrollspy;
pub mod theme;

pub use contact::*;
pub use download::*;
pub use modal::*;
pub use reveal::*;
pub use scrollspy::*;
pub use theme::*;
