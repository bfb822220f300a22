//! Sidebar Component
//!
//! Brand, section navigation and the appearance toggle. On small
//! viewports it slides in as a drawer over a dimmed backdrop.

use leptos::prelude::*;

use crate::context::{AppContext, NavSection, Screen};
use crate::store::{session_toggle_theme, use_session, SessionStoreFields, Theme};

const NAV_ITEMS: &[(&str, NavSection)] = &[
    ("📊", NavSection::Dashboard),
    ("🎓", NavSection::Students),
    ("📄", NavSection::Results),
    ("💰", NavSection::Fees),
    ("🗓", NavSection::Attendance),
];

/// Landing screen for each sidebar entry
fn section_target(section: NavSection) -> Screen {
    match section {
        NavSection::Dashboard => Screen::Dashboard,
        NavSection::Students => Screen::Students,
        NavSection::Results => Screen::ResultsCreate,
        NavSection::Fees => Screen::Fees,
        NavSection::Attendance => Screen::Attendance,
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let sidebar_class = move || {
        if ctx.sidebar_open.get() {
            "sidebar open"
        } else {
            "sidebar"
        }
    };

    view! {
        // Backdrop only while the mobile drawer is open
        <Show when=move || ctx.sidebar_open.get()>
            <div class="sidebar-backdrop" on:click=move |_| ctx.close_sidebar()></div>
        </Show>

        <aside class=sidebar_class>
            <div class="sidebar-brand">
                <div class="brand-badge">"N"</div>
                <div>
                    <div class="brand-name">"Nymph Classes"</div>
                    <div class="brand-sub">"School Admin"</div>
                </div>
            </div>

            <nav class="sidebar-nav">
                {NAV_ITEMS.iter().map(|(icon, section)| {
                    let section = *section;
                    view! {
                        <button
                            class=move || {
                                if ctx.screen.get().nav_section() == section {
                                    "nav-item active"
                                } else {
                                    "nav-item"
                                }
                            }
                            on:click=move |_| ctx.navigate(section_target(section))
                        >
                            <span class="nav-icon">{*icon}</span>
                            <span>{section.label()}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="sidebar-footer">
                <div class="footer-label">"Appearance"</div>
                <button class="theme-toggle" on:click=move |_| session_toggle_theme(&session)>
                    {move || match session.theme().get() {
                        Theme::Dark => "☀️ Light Mode",
                        Theme::Light => "🌙 Dark Mode",
                    }}
                </button>
            </div>
        </aside>
    }
}
