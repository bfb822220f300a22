//! Create Result Screen
//!
//! Standard-wise result entry. The roster loads for one standard, the
//! subject chips define the columns and every student gets a row of
//! mark inputs. Entered marks survive chip and total changes. Saving
//! posts one result per student in roster order and stops at the
//! first failure, naming who made it in.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{Popup, PopupState};
use crate::context::{AppContext, Screen};
use crate::marks::{init_matrix, rebuild_matrix, set_marks, MarksMatrix};
use crate::models::Student;
use crate::outcome::SaveReport;

const SUBJECT_OPTIONS: &[&str] = &[
    "Maths",
    "Science",
    "English",
    "Gujarati",
    "Hindi",
    "Social Science",
];

#[component]
pub fn ResultsCreatePage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (standard, set_standard) = signal(String::new());
    let (exam_name, set_exam_name) = signal(String::new());
    let (exam_date, set_exam_date) = signal(String::new());
    let (total_marks, set_total_marks) = signal("100".to_string());
    let (subjects, set_subjects) = signal(Vec::<String>::new());
    let (roster, set_roster) = signal(Vec::<Student>::new());
    let (matrix, set_matrix) = signal(MarksMatrix::new());
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (popup, set_popup) = signal(None::<PopupState>);

    let toggle_subject = move |subject: &str| {
        let subject = subject.to_string();
        set_subjects.update(|list| {
            if list.contains(&subject) {
                list.retain(|s| s != &subject);
            } else {
                // Column order follows click order
                list.push(subject);
            }
        });
    };

    let load_students = move |_| {
        let standard_now = standard.get();
        let subjects_now = subjects.get();
        if standard_now.is_empty() || subjects_now.is_empty() {
            set_popup.set(Some(PopupState::error(
                "Missing Data",
                "Please enter standard and select subjects",
            )));
            return;
        }
        let total_now = total_marks.get();
        set_loading.set(true);
        spawn_local(async move {
            match api.students_by_standard(&standard_now).await {
                Ok(list) if list.is_empty() => {
                    set_popup.set(Some(PopupState::info(
                        "No Students",
                        "No students found for this standard",
                    )));
                    set_roster.set(Vec::new());
                    set_matrix.set(MarksMatrix::new());
                }
                Ok(list) => {
                    web_sys::console::log_1(
                        &format!("[Results] Loaded {} students", list.len()).into(),
                    );
                    set_matrix.set(init_matrix(&list, &subjects_now, &total_now));
                    set_roster.set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Results] Roster error: {}", e).into());
                    set_popup.set(Some(PopupState::error("Error", "Failed to load students")));
                }
            }
            set_loading.set(false);
        });
    };

    // Rebuild the grid when chips or the shared total change
    Effect::new(move |_| {
        let subjects_now = subjects.get();
        let total_now = total_marks.get();
        let roster_now = roster.get();
        if roster_now.is_empty() {
            return;
        }
        set_matrix.update(|m| {
            *m = rebuild_matrix(m, &roster_now, &subjects_now, &total_now);
        });
    });

    let save = move |_| {
        let exam_name_now = exam_name.get();
        let exam_date_now = exam_date.get();
        if exam_name_now.is_empty() || exam_date_now.is_empty() {
            set_popup.set(Some(PopupState::error(
                "Missing Details",
                "Please fill exam name and date",
            )));
            return;
        }
        let roster_now = roster.get_untracked();
        let matrix_now = matrix.get_untracked();
        let standard_now = standard.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let mut report = SaveReport::new();
            let mut stopped = false;
            for student in &roster_now {
                if stopped {
                    report.record_skipped(&student.name);
                    continue;
                }
                let rows = matrix_now.get(&student.id).cloned().unwrap_or_default();
                match api
                    .create_result(&student.id, &exam_name_now, &standard_now, &exam_date_now, &rows)
                    .await
                {
                    Ok(()) => report.record_saved(&student.name),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[Results] Save error for {}: {}", student.name, e).into(),
                        );
                        report.record_failed(&student.name);
                        stopped = true;
                    }
                }
            }

            if report.all_saved() {
                set_popup.set(Some(PopupState::success(
                    "Success",
                    "Results saved successfully",
                )));
                TimeoutFuture::new(1200).await;
                ctx.navigate(Screen::ResultsView);
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
                    <h2>"Create Result"</h2>
                    <p class="muted">"Standard wise result entry"</p>
                </div>
                <button class="btn btn-ghost" on:click=move |_| ctx.navigate(Screen::ResultsView)>
                    "View Results"
                </button>
            </div>

            <div class="form-card">
                <div class="form-grid">
                    <label class="form-field">
                        <span class="field-label">"Standard"</span>
                        <input
                            type="text"
                            placeholder="e.g. 5"
                            prop:value=standard
                            on:input=move |ev| set_standard.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="field-label">"Exam Name"</span>
                        <input
                            type="text"
                            placeholder="e.g. Unit Test 1"
                            prop:value=exam_name
                            on:input=move |ev| set_exam_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="field-label">"Exam Date"</span>
                        <input
                            type="date"
                            prop:value=exam_date
                            on:input=move |ev| set_exam_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="field-label">"Total Marks"</span>
                        <input
                            type="number"
                            prop:value=total_marks
                            on:input=move |ev| set_total_marks.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <div class="chip-row">
                    {SUBJECT_OPTIONS.iter().map(|subject| {
                        let name = *subject;
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if subjects.get().iter().any(|s| s == name) {
                                        "chip active"
                                    } else {
                                        "chip"
                                    }
                                }
                                on:click=move |_| toggle_subject(name)
                            >
                                {name}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <button class="btn btn-primary" disabled=loading on:click=load_students>
                    {move || if loading.get() { "Loading..." } else { "Load Students" }}
                </button>
            </div>

            <Show when=move || !roster.get().is_empty()>
                <section class="panel">
                    <h3>"Enter Marks"</h3>
                    <table class="data-table marks-table">
                        <thead>
                            <tr>
                                <th>"Student"</th>
                                {move || {
                                    let total = total_marks.get();
                                    subjects.get().iter().map(|subject| {
                                        view! { <th>{format!("{subject} / {total}")}</th> }
                                    }).collect_view()
                                }}
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || roster.get()
                                key=|s| s.id.clone()
                                children=move |student| {
                                    let row_id = student.id.clone();
                                    view! {
                                        <tr>
                                            <td class="student-name">{student.name.clone()}</td>
                                            {move || {
                                                let count = subjects.with(|s| s.len());
                                                (0..count).map(|column| {
                                                    let value_id = row_id.clone();
                                                    let input_id = row_id.clone();
                                                    view! {
                                                        <td>
                                                            <input
                                                                type="number"
                                                                class="marks-input"
                                                                prop:value=move || {
                                                                    matrix.with(|m| {
                                                                        m.get(&value_id)
                                                                            .and_then(|rows| rows.get(column))
                                                                            .map(|r| r.marks_obtained.clone())
                                                                            .unwrap_or_default()
                                                                    })
                                                                }
                                                                on:input=move |ev| {
                                                                    set_matrix.update(|m| {
                                                                        set_marks(
                                                                            m,
                                                                            &input_id,
                                                                            column,
                                                                            event_target_value(&ev),
                                                                        );
                                                                    });
                                                                }
                                                            />
                                                        </td>
                                                    }
                                                }).collect_view()
                                            }}
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>

                    <button class="btn btn-primary full" disabled=saving on:click=save>
                        {move || if saving.get() { "Saving..." } else { "Save Results" }}
                    </button>
                </section>
            </Show>

            <Popup popup=popup set_popup=set_popup />
        </div>
    }
}
