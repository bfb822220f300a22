//! Browser Storage
//!
//! localStorage persistence for the session token and the theme preference.
//! Storage access can fail (privacy mode, sandboxed frames), so readers
//! return Option and writers are best-effort.

use web_sys::window;

pub const TOKEN_KEY: &str = "token";
pub const THEME_KEY: &str = "theme";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

pub fn set_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn get_theme() -> Option<String> {
    local_storage()?.get_item(THEME_KEY).ok()?
}

pub fn set_theme(value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, value);
    }
}
