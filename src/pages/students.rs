//! Students Screen
//!
//! Directory of every student with client-side search, a standard
//! filter and row actions. Deletes go through the confirm popup and
//! drop the row locally once the backend agrees.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{Popup, PopupState};
use crate::context::{AppContext, Screen};
use crate::models::Student;
use crate::search::filter_students;

#[component]
pub fn StudentsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (students, set_students) = signal(Vec::<Student>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (standard, set_standard) = signal(String::new());
    let (popup, set_popup) = signal(None::<PopupState>);
    let (pending_delete, set_pending_delete) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api.list_students().await {
                Ok(list) => {
                    web_sys::console::log_1(
                        &format!("[Students] Loaded {} students", list.len()).into(),
                    );
                    set_students.set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Students] Load error: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    let filtered = move || {
        let all = students.get();
        filter_students(&all, &search.get(), &standard.get())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    let ask_delete = move |id: String| {
        set_pending_delete.set(Some(id));
        set_popup.set(Some(PopupState::confirm(
            "Delete Student",
            "Are you sure you want to delete this student?",
        )));
    };

    let confirm_delete = Callback::new(move |_| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        set_pending_delete.set(None);
        spawn_local(async move {
            match api.delete_student(&id).await {
                Ok(()) => {
                    set_students.update(|list| list.retain(|s| s.id != id));
                    set_popup.set(Some(PopupState::success(
                        "Deleted",
                        "Student deleted successfully",
                    )));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Students] Delete error: {}", e).into());
                    set_popup.set(Some(PopupState::error("Error", "Failed to delete student")));
                }
            }
        });
    });

    view! {
        <div class="page-body">
            <div class="page-head">
                <div>
                    <h2>"Students"</h2>
                    <p class="muted">"All enrolled students"</p>
                </div>
                <button class="btn btn-primary" on:click=move |_| ctx.navigate(Screen::StudentAdd)>
                    "Add Student"
                </button>
            </div>

            <div class="filter-row">
                <input
                    type="text"
                    placeholder="Search name or roll number"
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_standard.set(event_target_value(&ev))>
                    <option value="">"All Standards"</option>
                    {(1..=12).map(|n| view! {
                        <option value=n.to_string()>{format!("Standard {n}")}</option>
                    }).collect_view()}
                </select>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted">"Loading students…"</p> }
            >
                <Show
                    when=move || !filtered().is_empty()
                    fallback=|| view! { <p class="muted">"No students found"</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Roll No"</th>
                                <th>"Standard"</th>
                                <th>"Phone"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=filtered
                                key=|s| s.id.clone()
                                children=move |student| {
                                    let view_id = student.id.clone();
                                    let delete_id = student.id.clone();
                                    view! {
                                        <tr>
                                            <td>{student.name.clone()}</td>
                                            <td>{student.roll_number.clone()}</td>
                                            <td>{student.standard.clone()}</td>
                                            <td>{student.phone.clone()}</td>
                                            <td class="row-actions">
                                                <button
                                                    class="btn btn-ghost small"
                                                    on:click=move |_| {
                                                        ctx.navigate(Screen::StudentDetail(view_id.clone()))
                                                    }
                                                >
                                                    "View"
                                                </button>
                                                <button
                                                    class="btn btn-danger small"
                                                    on:click=move |_| ask_delete(delete_id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Popup popup=popup set_popup=set_popup on_confirm=confirm_delete />
        </div>
    }
}
