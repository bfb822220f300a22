//! View Results Screen
//!
//! Drill-down: standard to students, student to exams, exam to the
//! subject breakdown. The detail pane offers the PDF download and
//! deletion of a result.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::ApiClient;
use crate::components::{Popup, PopupState};
use crate::context::{AppContext, Screen};
use crate::models::{ExamResult, Student};

/// Hand the bytes to the browser as a named download
fn trigger_pdf_download(bytes: &[u8], filename: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "failed to build blob".to_string())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "failed to create object url".to_string())?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "failed to create anchor".to_string())?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[component]
pub fn ResultsViewPage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (standard, set_standard) = signal(String::new());
    let (students, set_students) = signal(Vec::<Student>::new());
    let (selected_student, set_selected_student) = signal(None::<Student>);
    let (results, set_results) = signal(Vec::<ExamResult>::new());
    let (detail, set_detail) = signal(None::<ExamResult>);
    let (loading_students, set_loading_students) = signal(false);
    let (loading_results, set_loading_results) = signal(false);
    let (loading_detail, set_loading_detail) = signal(false);
    let (popup, set_popup) = signal(None::<PopupState>);
    let (pending_delete, set_pending_delete) = signal(None::<String>);

    let load_students = move |_| {
        let standard_now = standard.get();
        if standard_now.is_empty() {
            set_popup.set(Some(PopupState::error(
                "Missing Standard",
                "Please enter standard",
            )));
            return;
        }
        set_loading_students.set(true);
        set_students.set(Vec::new());
        set_selected_student.set(None);
        set_results.set(Vec::new());
        set_detail.set(None);
        spawn_local(async move {
            match api.students_by_standard(&standard_now).await {
                Ok(list) => set_students.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Results] Roster error: {}", e).into());
                }
            }
            set_loading_students.set(false);
        });
    };

    let select_student = move |student: Student| {
        let id = student.id.clone();
        set_selected_student.set(Some(student));
        set_results.set(Vec::new());
        set_detail.set(None);
        set_loading_results.set(true);
        spawn_local(async move {
            match api.results_by_student(&id).await {
                Ok(list) => {
                    if list.is_empty() {
                        set_popup.set(Some(PopupState::info(
                            "No Results",
                            "No results found for this student",
                        )));
                    }
                    set_results.set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Results] List error: {}", e).into());
                }
            }
            set_loading_results.set(false);
        });
    };

    let select_result = move |id: String| {
        set_loading_detail.set(true);
        set_detail.set(None);
        spawn_local(async move {
            match api.result_detail(&id).await {
                Ok(result) => set_detail.set(Some(result)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Results] Detail error: {}", e).into());
                }
            }
            set_loading_detail.set(false);
        });
    };

    let download = move |_| {
        let Some(result) = detail.get_untracked() else {
            return;
        };
        let Some(student) = selected_student.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api.result_pdf(&result.student_id, &result.id).await {
                Ok(bytes) => {
                    let filename = format!("{}_result.pdf", student.name);
                    if let Err(e) = trigger_pdf_download(&bytes, &filename) {
                        web_sys::console::error_1(&format!("[Results] Download error: {}", e).into());
                        set_popup.set(Some(PopupState::error("Error", "Failed to download PDF")));
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Results] PDF error: {}", e).into());
                    set_popup.set(Some(PopupState::error("Error", "Failed to download PDF")));
                }
            }
        });
    };

    let ask_delete = move |_| {
        let Some(result) = detail.get_untracked() else {
            return;
        };
        set_pending_delete.set(Some(result.id));
        set_popup.set(Some(PopupState::confirm(
            "Delete Result",
            "Are you sure you want to delete?",
        )));
    };

    let confirm_delete = Callback::new(move |_| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        set_pending_delete.set(None);
        spawn_local(async move {
            match api.delete_result(&id).await {
                Ok(()) => {
                    set_results.update(|list| list.retain(|r| r.id != id));
                    set_detail.set(None);
                    set_popup.set(Some(PopupState::success(
                        "Deleted",
                        "Result deleted successfully",
                    )));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Results] Delete error: {}", e).into());
                    set_popup.set(Some(PopupState::error("Error", "Failed to delete result")));
                }
            }
        });
    });

    view! {
        <div class="page-body">
            <div class="page-head">
                <div>
                    <h2>"View Results"</h2>
                    <p class="muted">"Standard → Student → Exam → Result"</p>
                </div>
                <button class="btn btn-ghost" on:click=move |_| ctx.navigate(Screen::ResultsCreate)>
                    "← Back"
                </button>
            </div>

            <div class="filter-row">
                <input
                    type="text"
                    placeholder="Enter Standard"
                    prop:value=standard
                    on:input=move |ev| set_standard.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" disabled=loading_students on:click=load_students>
                    {move || if loading_students.get() { "Loading students..." } else { "Load Students" }}
                </button>
            </div>

            <div class="results-panes">
                <section class="panel pane">
                    <h3>"Students"</h3>
                    <For
                        each=move || students.get()
                        key=|s| s.id.clone()
                        children=move |student| {
                            let active_id = student.id.clone();
                            let pick = student.clone();
                            let roll = if student.roll_number.is_empty() {
                                "-".to_string()
                            } else {
                                student.roll_number.clone()
                            };
                            view! {
                                <button
                                    class=move || {
                                        let is_active = selected_student
                                            .with(|sel| {
                                                sel.as_ref().map(|s| s.id == active_id).unwrap_or(false)
                                            });
                                        if is_active { "pane-row active" } else { "pane-row" }
                                    }
                                    on:click=move |_| select_student(pick.clone())
                                >
                                    <span class="student-name">{student.name.clone()}</span>
                                    <span class="muted small">{format!("Roll: {roll}")}</span>
                                </button>
                            }
                        }
                    />
                </section>

                <section class="panel pane">
                    <h3>"Exams"</h3>
                    <Show when=move || loading_results.get()>
                        <p class="muted">"Loading results..."</p>
                    </Show>
                    <Show when=move || {
                        selected_student.get().is_some()
                            && !loading_results.get()
                            && results.get().is_empty()
                    }>
                        <p class="muted">"No exams found"</p>
                    </Show>
                    <For
                        each=move || results.get()
                        key=|r| r.id.clone()
                        children=move |result| {
                            let active_id = result.id.clone();
                            let pick_id = result.id.clone();
                            let grade = result.grade.clone().unwrap_or_else(|| "-".to_string());
                            let percent = result
                                .percentage
                                .map(|p| format!("{p}%"))
                                .unwrap_or_else(|| "-".to_string());
                            // Exam dates arrive as full ISO timestamps
                            let date: String = result.exam_date.chars().take(10).collect();
                            view! {
                                <button
                                    class=move || {
                                        let is_active = detail
                                            .with(|d| {
                                                d.as_ref().map(|r| r.id == active_id).unwrap_or(false)
                                            });
                                        if is_active { "pane-row active" } else { "pane-row" }
                                    }
                                    on:click=move |_| select_result(pick_id.clone())
                                >
                                    <span class="student-name">{result.exam_name.clone()}</span>
                                    <span class="muted small">{date}</span>
                                    <span class="muted small">
                                        {format!("Grade: {grade} · {percent}")}
                                    </span>
                                </button>
                            }
                        }
                    />
                </section>

                <section class="panel pane wide">
                    <h3>"Result"</h3>
                    <Show when=move || loading_detail.get()>
                        <p class="muted">"Loading result..."</p>
                    </Show>
                    {move || detail.get().map(|result| {
                        let percent = result
                            .percentage
                            .map(|p| format!("{p}%"))
                            .unwrap_or_else(|| "-".to_string());
                        let grade = result.grade.clone().unwrap_or_else(|| "-".to_string());
                        let subject_rows = result
                            .subjects
                            .iter()
                            .map(|s| view! {
                                <tr>
                                    <td>{s.name.clone()}</td>
                                    <td>{s.marks_obtained.clone()}</td>
                                    <td>{s.total_marks.clone()}</td>
                                </tr>
                            })
                            .collect_view();
                        view! {
                            <div class="result-detail">
                                <div class="detail-row">
                                    <span class="detail-label">"Exam"</span>
                                    <span class="detail-value">{result.exam_name.clone()}</span>
                                </div>
                                <div class="detail-row">
                                    <span class="detail-label">"Percentage"</span>
                                    <span class="detail-value">{percent}</span>
                                </div>
                                <div class="detail-row">
                                    <span class="detail-label">"Grade"</span>
                                    <span class="detail-value">{grade}</span>
                                </div>

                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Subject"</th>
                                            <th>"Marks"</th>
                                            <th>"Total"</th>
                                        </tr>
                                    </thead>
                                    <tbody>{subject_rows}</tbody>
                                </table>

                                <div class="form-actions">
                                    <button class="btn btn-primary" on:click=download>
                                        "Download PDF"
                                    </button>
                                    <button class="btn btn-danger" on:click=ask_delete>
                                        "Delete Result"
                                    </button>
                                </div>
                            </div>
                        }
                    })}
                </section>
            </div>

            <Popup popup=popup set_popup=set_popup on_confirm=confirm_delete />
        </div>
    }
}
