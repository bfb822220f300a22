//! Topbar Component
//!
//! Fixed header above the content area. The hamburger only matters on
//! small viewports where the sidebar is a drawer.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Topbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <header class="topbar">
            <button class="menu-btn" on:click=move |_| ctx.open_sidebar()>
                "☰"
            </button>
            <h1 class="topbar-title">
                {move || ctx.screen.get().nav_section().label()}
            </h1>
        </header>
    }
}
