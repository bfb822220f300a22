//! Attendance Records Screen
//!
//! Read-only lookup of saved records for one standard and date.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{Popup, PopupState};
use crate::context::{AppContext, Screen};
use crate::models::{AttendanceFilterRow, AttendanceStatus};

#[component]
pub fn AttendanceFilterPage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (standard, set_standard) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (rows, set_rows) = signal(Vec::<AttendanceFilterRow>::new());
    let (loading, set_loading) = signal(false);
    let (searched, set_searched) = signal(false);
    let (popup, set_popup) = signal(None::<PopupState>);

    let load = move |_| {
        let standard_now = standard.get();
        let date_now = date.get();
        if standard_now.is_empty() || date_now.is_empty() {
            set_popup.set(Some(PopupState::error("Missing Filters", "Select filters!")));
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match api.attendance_filter(&date_now, &standard_now).await {
                Ok(records) => {
                    web_sys::console::log_1(
                        &format!("[Attendance] {} records for {}", records.len(), date_now).into(),
                    );
                    set_rows.set(records);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Attendance] Filter error: {}", e).into());
                    set_rows.set(Vec::new());
                }
            }
            set_searched.set(true);
            set_loading.set(false);
        });
    };

    view! {
        <div class="page-body">
            <div class="page-head">
                <div>
                    <h2>"Attendance Records"</h2>
                    <p class="muted">"Browse saved attendance by date"</p>
                </div>
                <button class="btn btn-ghost" on:click=move |_| ctx.navigate(Screen::Attendance)>
                    "← Back"
                </button>
            </div>

            <div class="filter-row">
                <input
                    type="date"
                    prop:value=date
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_standard.set(event_target_value(&ev))>
                    <option value="">"Standard"</option>
                    {(1..=10).map(|n| view! {
                        <option value=n.to_string()>{n.to_string()}</option>
                    }).collect_view()}
                </select>
                <button class="btn btn-primary" disabled=loading on:click=load>
                    {move || if loading.get() { "Loading..." } else { "Load" }}
                </button>
            </div>

            <Show when=move || searched.get() && rows.get().is_empty() && !loading.get()>
                <p class="muted">"No records."</p>
            </Show>

            <div class="attendance-list">
                // Orphaned records have no student; index keys avoid collisions
                <For
                    each=move || { rows.get().into_iter().enumerate().collect::<Vec<_>>() }
                    key=|(i, _)| *i
                    children=move |(_, row)| {
                        let name = row
                            .student
                            .as_ref()
                            .map(|s| s.name.clone())
                            .unwrap_or_else(|| "-".to_string());
                        let badge = match row.status {
                            AttendanceStatus::Present => "badge present",
                            AttendanceStatus::Absent => "badge absent",
                        };
                        view! {
                            <div class="attendance-row">
                                <span class="student-name">{name}</span>
                                <span class=badge>{row.status.as_str()}</span>
                            </div>
                        }
                    }
                />
            </div>

            <Popup popup=popup set_popup=set_popup />
        </div>
    }
}
