//! Pending Fees Screen
//!
//! Lists students of one standard whose dues are outstanding. The
//! remaining amounts are whatever the backend computed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{AppContext, Screen};
use crate::models::PendingFeeRow;

#[component]
pub fn FeesPendingPage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (standard, set_standard) = signal(String::new());
    let (rows, set_rows) = signal(Vec::<PendingFeeRow>::new());
    let (loading, set_loading) = signal(false);
    let (searched, set_searched) = signal(false);

    let load = move |_| {
        let standard_now = standard.get();
        if standard_now.is_empty() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match api.pending_fees(&standard_now).await {
                Ok(list) => {
                    web_sys::console::log_1(
                        &format!("[Fees] {} pending rows for std {}", list.len(), standard_now)
                            .into(),
                    );
                    set_rows.set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Fees] Pending error: {}", e).into());
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
                    <h2>"Pending Fees"</h2>
                    <p class="muted">"View students with pending payments"</p>
                </div>
                <button class="btn btn-ghost" on:click=move |_| ctx.navigate(Screen::Fees)>
                    "← Back"
                </button>
            </div>

            <div class="filter-row">
                <input
                    type="number"
                    placeholder="Enter Standard (e.g. 5)"
                    prop:value=standard
                    on:input=move |ev| set_standard.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" disabled=loading on:click=load>
                    {move || if loading.get() { "Loading..." } else { "Load" }}
                </button>
            </div>

            <Show when=move || loading.get()>
                <p class="muted">"Loading pending fees..."</p>
            </Show>

            <Show when=move || searched.get() && !loading.get() && rows.get().is_empty()>
                <p class="muted">"No pending fees found."</p>
            </Show>

            <Show when=move || !rows.get().is_empty()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Student"</th>
                            <th>"Standard"</th>
                            <th>"Remaining"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|r| r.student.id.clone()
                            children=move |row| {
                                let roll = if row.student.roll_number.is_empty() {
                                    "-".to_string()
                                } else {
                                    row.student.roll_number.clone()
                                };
                                view! {
                                    <tr>
                                        <td>
                                            <div class="student-name">{row.student.name.clone()}</div>
                                            <div class="muted small">
                                                {format!("Roll: {roll}")}
                                            </div>
                                        </td>
                                        <td>{row.student.standard.clone()}</td>
                                        <td class="amount danger">
                                            {format!("₹ {}", row.remaining)}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
