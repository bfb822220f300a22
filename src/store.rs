//! Global Session Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! bearer token and the theme preference; both are mirrored to
//! localStorage so a reload restores them.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::storage;

/// Light/dark theme, persisted under the "theme" storage key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct Session {
    /// Bearer token attached to every authenticated request
    pub token: Option<String>,
    /// Current theme
    pub theme: Theme,
}

impl Session {
    /// Restore token and theme from localStorage
    pub fn load() -> Self {
        Self {
            token: storage::get_token(),
            theme: storage::get_theme()
                .map(|s| Theme::from_str(&s))
                .unwrap_or_default(),
        }
    }
}

/// Type alias for the store
pub type SessionStore = Store<Session>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Set the token after a successful login and persist it
pub fn session_set_token(store: &SessionStore, token: String) {
    storage::set_token(&token);
    *store.token().write() = Some(token);
}

/// Flip the theme, persist it and retag the document root
pub fn session_toggle_theme(store: &SessionStore) {
    let next = store.theme().get().toggled();
    storage::set_theme(next.as_str());
    apply_theme_class(next);
    store.theme().set(next);
}

/// Add or remove the `dark` class on the document root element
pub fn apply_theme_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let result = match theme {
        Theme::Dark => root.class_list().add_1("dark"),
        Theme::Light => root.class_list().remove_1("dark"),
    };
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip() {
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Theme::Dark);
        assert_eq!(Theme::from_str(Theme::Light.as_str()), Theme::Light);
        assert_eq!(Theme::from_str("garbage"), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
