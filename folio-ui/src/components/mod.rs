mod button;
mod cv_modal;
mod form_banner;
mod icons;
mod nav_bar;
mod section;
mod text_input;

pub use button::*;
pub use cv_modal::*;
pub use form_banner::*;
pub use icons::*;
pub use nav_bar::*;
pub use section::*;
pub use text_input::*;
