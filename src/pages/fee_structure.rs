//! Fee Structure Screen
//!
//! Sets the yearly fee for one standard and lists what is already
//! configured. Saving returns straight to the fees hub.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{AppContext, Screen};
use crate::models::FeeStructure;

#[component]
pub fn FeeStructurePage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (standard, set_standard) = signal(String::new());
    let (yearly_fee, set_yearly_fee) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (structures, set_structures) = signal(Vec::<FeeStructure>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match api.list_fee_structures().await {
                Ok(list) => set_structures.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Fees] Structures error: {}", e).into());
                }
            }
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let standard_now = standard.get();
        let fee_now = yearly_fee.get();
        if standard_now.is_empty() || fee_now.is_empty() {
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            match api.set_fee_structure(&standard_now, &fee_now).await {
                Ok(()) => {
                    web_sys::console::log_1(
                        &format!("[Fees] Structure saved for std {}", standard_now).into(),
                    );
                    ctx.navigate(Screen::Fees);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Fees] Structure error: {}", e).into());
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page-body">
            <div class="page-head">
                <div>
                    <h2>"Set Fees Structure"</h2>
                    <p class="muted">"Define yearly fees standard-wise"</p>
                </div>
                <button class="btn btn-ghost" on:click=move |_| ctx.navigate(Screen::Fees)>
                    "← Back"
                </button>
            </div>

            <form class="form-card" on:submit=submit>
                <label class="form-field">
                    <span class="field-label">"Standard"</span>
                    <input
                        type="number"
                        placeholder="e.g. 5"
                        prop:value=standard
                        on:input=move |ev| set_standard.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span class="field-label">"Yearly Fee (₹)"</span>
                    <input
                        type="number"
                        placeholder="e.g. 12000"
                        prop:value=yearly_fee
                        on:input=move |ev| set_yearly_fee.set(event_target_value(&ev))
                    />
                </label>

                <button type="submit" class="btn btn-primary full" disabled=saving>
                    {move || if saving.get() { "Saving..." } else { "Save Fees Structure" }}
                </button>
            </form>

            <Show when=move || !structures.get().is_empty()>
                <section class="panel">
                    <h3>"Configured Standards"</h3>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Standard"</th>
                                <th>"Yearly Fee"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || structures.get()
                                key=|s| s.standard.clone()
                                children=move |row| {
                                    view! {
                                        <tr>
                                            <td>{row.standard.clone()}</td>
                                            <td>{format!("₹ {}", row.yearly_fee)}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </section>
            </Show>
        </div>
    }
}
