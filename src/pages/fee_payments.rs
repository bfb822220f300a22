//! Fee Payment Screen
//!
//! Two-step flow: look up a student's fee status, then record a
//! payment against it. The payment form only exists once a status is
//! on screen, and amounts shown always come from a fresh status fetch,
//! never from local arithmetic.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{AppContext, Screen};
use crate::models::{FeeStatus, PaymentMode};

#[component]
pub fn FeePaymentsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (student_id, set_student_id) = signal(String::new());
    let (status, set_status) = signal(None::<FeeStatus>);
    let (checking, set_checking) = signal(false);
    let (amount, set_amount) = signal(String::new());
    let (mode, set_mode) = signal(PaymentMode::Cash);
    let (note, set_note) = signal(String::new());
    let (paying, set_paying) = signal(false);

    let check = move |_| {
        let id = student_id.get();
        if id.is_empty() {
            return;
        }
        set_checking.set(true);
        spawn_local(async move {
            match api.fee_status(&id).await {
                Ok(s) => set_status.set(Some(s)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Fees] Status error: {}", e).into());
                    set_status.set(None);
                }
            }
            set_checking.set(false);
        });
    };

    let pay = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = student_id.get();
        let amount_now = amount.get();
        if id.is_empty() || amount_now.is_empty() {
            return;
        }
        let mode_now = mode.get();
        let note_now = note.get();
        set_paying.set(true);
        spawn_local(async move {
            match api.pay_fee(&id, &amount_now, mode_now, &note_now).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[Fees] Payment recorded for {}", id).into());
                    set_amount.set(String::new());
                    set_note.set(String::new());
                    // The card reflects whatever the backend now says
                    match api.fee_status(&id).await {
                        Ok(s) => set_status.set(Some(s)),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("[Fees] Status refresh error: {}", e).into(),
                            );
                        }
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Fees] Payment error: {}", e).into());
                }
            }
            set_paying.set(false);
        });
    };

    view! {
        <div class="page-body">
            <div class="page-head">
                <div>
                    <h2>"Fee Payment"</h2>
                    <p class="muted">"Check fee status & record payments"</p>
                </div>
                <button class="btn btn-ghost" on:click=move |_| ctx.navigate(Screen::Fees)>
                    "← Back"
                </button>
            </div>

            <div class="filter-row">
                <input
                    type="text"
                    placeholder="Enter Student ID"
                    prop:value=student_id
                    on:input=move |ev| set_student_id.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" disabled=checking on:click=check>
                    {move || if checking.get() { "Checking..." } else { "Check Fee Status" }}
                </button>
            </div>

            {move || status.get().map(|s| {
                let remaining_class = if s.remaining > 0.0 {
                    "status-value danger"
                } else {
                    "status-value"
                };
                view! {
                    <div class="status-card">
                        <div class="status-item">
                            <span class="muted">"Total Fee"</span>
                            <span class="status-value">{format!("₹ {}", s.total_fee)}</span>
                        </div>
                        <div class="status-item">
                            <span class="muted">"Paid"</span>
                            <span class="status-value">{format!("₹ {}", s.total_paid)}</span>
                        </div>
                        <div class="status-item">
                            <span class="muted">"Remaining"</span>
                            <span class=remaining_class>{format!("₹ {}", s.remaining)}</span>
                        </div>
                    </div>
                }
            })}

            <Show when=move || status.get().is_some()>
                <form class="form-card" on:submit=pay>
                    <h3>"Add Payment"</h3>
                    <label class="form-field">
                        <span class="field-label">"Amount"</span>
                        <input
                            type="number"
                            prop:value=amount
                            on:input=move |ev| set_amount.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="field-label">"Payment Mode"</span>
                        <select on:change=move |ev| {
                            set_mode.set(PaymentMode::from_str(&event_target_value(&ev)))
                        }>
                            {PaymentMode::ALL.iter().map(|m| view! {
                                <option value=m.as_str()>{m.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <label class="form-field">
                        <span class="field-label">"Note (optional)"</span>
                        <input
                            type="text"
                            prop:value=note
                            on:input=move |ev| set_note.set(event_target_value(&ev))
                        />
                    </label>

                    <button type="submit" class="btn btn-primary full" disabled=paying>
                        {move || if paying.get() { "Processing..." } else { "Pay Fee" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
