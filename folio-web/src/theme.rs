//! Theme persistence and application.

use folio_common::{Theme, LIGHT_THEME_CLASS, THEME_STORAGE_KEY};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Saved preference, defaulting to dark when storage is unavailable or
/// holds garbage.
pub fn load_theme() -> Theme {
    let stored = local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

pub fn store_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Toggle the light-theme class on the document body.
pub fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let classes = body.class_list();
    if theme.is_light() {
        let _ = classes.add_1(LIGHT_THEME_CLASS);
    } else {
        let _ = classes.remove_1(LIGHT_THEME_CLASS);
    }
}
