//! Student Detail Screen
//!
//! Read-only view of one student record with edit and delete actions.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{Popup, PopupState};
use crate::context::{AppContext, Screen};
use crate::models::Student;

#[component]
pub fn StudentDetailPage(id: String) -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (student, set_student) = signal(None::<Student>);
    let (loading, set_loading) = signal(true);
    let (popup, set_popup) = signal(None::<PopupState>);

    let load_id = id.clone();
    Effect::new(move |_| {
        let id = load_id.clone();
        spawn_local(async move {
            match api.get_student(&id).await {
                Ok(s) => set_student.set(Some(s)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Students] Detail error: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    let edit_id = id.clone();
    let edit = Callback::new(move |_: leptos::ev::MouseEvent| {
        ctx.navigate(Screen::StudentEdit(edit_id.clone()))
    });

    let ask_delete = move |_| {
        set_popup.set(Some(PopupState::confirm(
            "Delete Student",
            "Are you sure you want to delete?",
        )));
    };

    let delete_id = id.clone();
    let confirm_delete = Callback::new(move |_| {
        let id = delete_id.clone();
        spawn_local(async move {
            match api.delete_student(&id).await {
                Ok(()) => {
                    set_popup.set(Some(PopupState::success(
                        "Deleted",
                        "Student deleted successfully",
                    )));
                    TimeoutFuture::new(1200).await;
                    ctx.navigate(Screen::Students);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Students] Delete error: {}", e).into());
                    set_popup.set(Some(PopupState::error("Error", "Error deleting student")));
                }
            }
        });
    });

    // Field rows render from the loaded record
    let detail_row = |label: &'static str, value: String| {
        view! {
            <div class="detail-row">
                <span class="detail-label">{label}</span>
                <span class="detail-value">{value}</span>
            </div>
        }
    };

    view! {
        <div class="page-body">
            <div class="page-head">
                <div>
                    <h2>"Student Details"</h2>
                    <p class="muted">"Full record"</p>
                </div>
                <button class="btn btn-ghost" on:click=move |_| ctx.navigate(Screen::Students)>
                    "← Back"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted">"Loading..."</p> }
            >
                {move || match student.get() {
                    Some(s) => view! {
                        <div class="detail-card">
                            {detail_row("Name", s.name.clone())}
                            {detail_row("Roll Number", s.roll_number.clone())}
                            {detail_row("Standard", s.standard.clone())}
                            {detail_row("Section", s.section.clone())}
                            {detail_row("Father Name", s.father_name.clone())}
                            {detail_row("Mother Name", s.mother_name.clone())}
                            {detail_row("Phone", s.phone.clone())}
                            {detail_row("Address", s.address.clone())}

                            <div class="form-actions">
                                <button class="btn btn-primary" on:click=move |ev| edit.run(ev)>
                                    "Edit"
                                </button>
                                <button class="btn btn-danger" on:click=ask_delete>
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    }.into_any(),
                    None => view! { <p class="muted">"No student found"</p> }.into_any(),
                }}
            </Show>

            <Popup popup=popup set_popup=set_popup on_confirm=confirm_delete />
        </div>
    }
}
