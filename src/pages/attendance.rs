//! Attendance Screen
//!
//! Roster for one standard and date. Changing either filter refetches
//! both the roster and any existing records; the fetch guard drops
//! responses that a newer selection has superseded. Saving posts one
//! upsert per student and reports per-student outcomes.

use futures::future::join_all;
use futures::join;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::attendance_sheet::AttendanceSheet;
use crate::components::{Popup, PopupState};
use crate::context::{AppContext, Screen};
use crate::fetch_guard::FetchGuard;
use crate::models::{AttendanceStatus, Student};
use crate::outcome::SaveReport;
use crate::search::matches_search;

/// Today's date as YYYY-MM-DD in the browser's clock
fn today_ymd() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.chars().take(10).collect()
}

#[component]
pub fn AttendancePage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (standard, set_standard) = signal(String::new());
    let (date, set_date) = signal(today_ymd());
    let (search, set_search) = signal(String::new());
    let (roster, set_roster) = signal(Vec::<Student>::new());
    let (sheet, set_sheet) = signal(AttendanceSheet::new());
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (popup, set_popup) = signal(None::<PopupState>);
    let guard = RwSignal::new(FetchGuard::new());

    // Refetch roster and existing records whenever the selection changes
    Effect::new(move |_| {
        let standard = standard.get();
        let date = date.get();
        if standard.is_empty() || date.is_empty() {
            set_roster.set(Vec::new());
            set_sheet.set(AttendanceSheet::new());
            return;
        }
        let generation = guard.try_update(|g| g.begin()).unwrap_or_default();
        set_loading.set(true);
        spawn_local(async move {
            let (students_res, marks_res) = join!(
                api.students_by_standard(&standard),
                api.attendance_by_standard(&standard, &date)
            );
            if !guard.with_untracked(|g| g.is_current(generation)) {
                // A newer selection owns the screen now
                return;
            }
            match students_res {
                Ok(list) => {
                    web_sys::console::log_1(
                        &format!("[Attendance] Loaded {} students for std {}", list.len(), standard)
                            .into(),
                    );
                    set_roster.set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Attendance] Roster error: {}", e).into());
                    set_roster.set(Vec::new());
                }
            }
            let marks = match marks_res {
                Ok(marks) => marks,
                Err(e) => {
                    web_sys::console::error_1(&format!("[Attendance] Records error: {}", e).into());
                    Vec::new()
                }
            };
            set_sheet.set(AttendanceSheet::from_marks(marks));
            set_loading.set(false);
        });
    });

    let filtered = move || {
        let all = roster.get();
        all.iter()
            .filter(|s| matches_search(s, &search.get()))
            .cloned()
            .collect::<Vec<_>>()
    };

    let bulk = move |status: AttendanceStatus| {
        let ids: Vec<String> = filtered().iter().map(|s| s.id.clone()).collect();
        set_sheet.update(|sheet| {
            sheet.bulk_apply(ids.iter().map(String::as_str), status);
        });
    };

    let save = move |_| {
        let roster_now = roster.get_untracked();
        if roster_now.is_empty() {
            return;
        }
        let plan = sheet.get_untracked().save_plan(&roster_now);
        let date_now = date.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let requests = plan
                .iter()
                .map(|mark| api.mark_attendance(&mark.student_id, &date_now, mark.status));
            let results = join_all(requests).await;

            let mut report = SaveReport::new();
            for (student, result) in roster_now.iter().zip(results) {
                match result {
                    Ok(()) => report.record_saved(&student.name),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[Attendance] Save error for {}: {}", student.name, e).into(),
                        );
                        report.record_failed(&student.name);
                    }
                }
            }

            if report.all_saved() {
                set_sheet.update(|s| s.mark_saved());
                set_popup.set(Some(PopupState::success(
                    "Saved",
                    "Attendance saved successfully",
                )));
            } else {
                set_popup.set(Some(PopupState::error("Partial Save", &report.summary())));
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page-body">
            <div class="page-head">
                <div>
                    <h2>"Attendance"</h2>
                    <p class="muted">"Mark daily attendance standard-wise"</p>
                </div>
                <button
                    class="btn btn-ghost"
                    on:click=move |_| ctx.navigate(Screen::AttendanceFilter)
                >
                    "View Records"
                </button>
            </div>

            <div class="filter-row">
                <select on:change=move |ev| set_standard.set(event_target_value(&ev))>
                    <option value="">"Standard"</option>
                    {(1..=10).map(|n| view! {
                        <option value=n.to_string()>{n.to_string()}</option>
                    }).collect_view()}
                </select>
                <input
                    type="date"
                    prop:value=date
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Search name or roll number"
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || sheet.with(|s| s.exists())>
                <div class="banner info">
                    "Attendance already exists for this date. You can update it."
                </div>
            </Show>

            <Show when=move || !roster.get().is_empty()>
                <div class="bulk-row">
                    <button
                        class="btn btn-ghost small"
                        on:click=move |_| bulk(AttendanceStatus::Present)
                    >
                        "All Present"
                    </button>
                    <button
                        class="btn btn-ghost small"
                        on:click=move |_| bulk(AttendanceStatus::Absent)
                    >
                        "All Absent"
                    </button>
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted">"Loading students…"</p> }
            >
                <Show
                    when=move || !standard.get().is_empty() && filtered().is_empty()
                >
                    <p class="muted">"No students found"</p>
                </Show>

                <div class="attendance-list">
                    <For
                        each=filtered
                        key=|s| s.id.clone()
                        children=move |student| {
                            let present_id = student.id.clone();
                            let absent_id = student.id.clone();
                            let status_id = student.id.clone();
                            let status_id2 = student.id.clone();
                            let roll = if student.roll_number.is_empty() {
                                "-".to_string()
                            } else {
                                student.roll_number.clone()
                            };
                            view! {
                                <div class="attendance-row">
                                    <div>
                                        <div class="student-name">{student.name.clone()}</div>
                                        <div class="muted small">{format!("Roll: {roll}")}</div>
                                    </div>
                                    <div class="status-toggle">
                                        <button
                                            class=move || {
                                                if sheet.with(|s| s.status_of(&status_id))
                                                    == Some(AttendanceStatus::Present)
                                                {
                                                    "toggle-btn present active"
                                                } else {
                                                    "toggle-btn present"
                                                }
                                            }
                                            on:click=move |_| {
                                                set_sheet.update(|s| {
                                                    s.set_status(&present_id, AttendanceStatus::Present)
                                                });
                                            }
                                        >
                                            "Present"
                                        </button>
                                        <button
                                            class=move || {
                                                if sheet.with(|s| s.status_of(&status_id2))
                                                    == Some(AttendanceStatus::Absent)
                                                {
                                                    "toggle-btn absent active"
                                                } else {
                                                    "toggle-btn absent"
                                                }
                                            }
                                            on:click=move |_| {
                                                set_sheet.update(|s| {
                                                    s.set_status(&absent_id, AttendanceStatus::Absent)
                                                });
                                            }
                                        >
                                            "Absent"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                <Show when=move || !roster.get().is_empty()>
                    <button class="btn btn-primary full" disabled=saving on:click=save>
                        {move || {
                            if saving.get() {
                                "Saving..."
                            } else if sheet.with(|s| s.exists()) {
                                "Update Attendance"
                            } else {
                                "Save Attendance"
                            }
                        }}
                    </button>
                </Show>
            </Show>

            <Popup popup=popup set_popup=set_popup />
        </div>
    }
}
