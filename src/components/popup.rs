//! Popup Component
//!
//! Modal used for every success/error/info message and for delete
//! confirmations. Screens hold an `Option<PopupState>` signal; `None`
//! renders nothing.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Success,
    Error,
    Info,
    Confirm,
}

/// One modal's content
#[derive(Debug, Clone, PartialEq)]
pub struct PopupState {
    pub kind: PopupKind,
    pub title: String,
    pub message: String,
}

impl PopupState {
    fn new(kind: PopupKind, title: &str, message: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn success(title: &str, message: &str) -> Self {
        Self::new(PopupKind::Success, title, message)
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self::new(PopupKind::Error, title, message)
    }

    pub fn info(title: &str, message: &str) -> Self {
        Self::new(PopupKind::Info, title, message)
    }

    pub fn confirm(title: &str, message: &str) -> Self {
        Self::new(PopupKind::Confirm, title, message)
    }
}

fn icon_for(kind: PopupKind) -> (&'static str, &'static str) {
    match kind {
        PopupKind::Success => ("popup-icon success", "✓"),
        PopupKind::Error => ("popup-icon error", "✕"),
        PopupKind::Info => ("popup-icon info", "i"),
        PopupKind::Confirm => ("popup-icon confirm", "!"),
    }
}

/// Modal dialog
///
/// Cancel is always offered. A `Confirm` popup additionally shows the
/// red confirm button wired to `on_confirm`; every other kind shows an
/// indigo OK button that only closes.
#[component]
pub fn Popup(
    popup: ReadSignal<Option<PopupState>>,
    set_popup: WriteSignal<Option<PopupState>>,
    #[prop(optional, into)] on_confirm: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        {move || {
            popup.get().map(|state| {
                let (icon_class, icon) = icon_for(state.kind);
                let is_confirm = state.kind == PopupKind::Confirm;
                view! {
                    <div class="popup-overlay">
                        <div class="popup-card">
                            <div class=icon_class>{icon}</div>
                            <h3 class="popup-title">{state.title.clone()}</h3>
                            <p class="popup-message">{state.message.clone()}</p>
                            <div class="popup-actions">
                                <button
                                    class="btn btn-ghost"
                                    on:click=move |_| set_popup.set(None)
                                >
                                    "Cancel"
                                </button>
                                <Show
                                    when=move || is_confirm
                                    fallback=move || view! {
                                        <button
                                            class="btn btn-primary"
                                            on:click=move |_| set_popup.set(None)
                                        >
                                            "OK"
                                        </button>
                                    }
                                >
                                    <button
                                        class="btn btn-danger"
                                        on:click=move |_| {
                                            set_popup.set(None);
                                            if let Some(cb) = on_confirm {
                                                cb.run(());
                                            }
                                        }
                                    >
                                        "Confirm"
                                    </button>
                                </Show>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
