//! Fees Hub Screen
//!
//! Entry point to the fee workflows plus the collection numbers. The
//! stat row only appears once analytics have arrived; a failed fetch
//! leaves just the action cards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{fmt_count, fmt_money, ActionCard, StatCard};
use crate::context::{AppContext, Screen};
use crate::models::FeeAnalytics;

#[component]
pub fn FeesPage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (analytics, set_analytics) = signal(None::<FeeAnalytics>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api.fee_analytics().await {
                Ok(a) => set_analytics.set(Some(a)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Fees] Analytics error: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="page-body">
            <div class="page-head">
                <div>
                    <h2>"Fees Management"</h2>
                    <p class="muted">"Structures, payments and dues"</p>
                </div>
            </div>

            <div class="action-grid">
                <ActionCard
                    icon="🧾"
                    title="Set Fees"
                    subtitle="Yearly fee per standard"
                    on_click=Callback::new(move |_| ctx.navigate(Screen::FeeStructure))
                />
                <ActionCard
                    icon="💳"
                    title="Add Payment"
                    subtitle="Record a student payment"
                    on_click=Callback::new(move |_| ctx.navigate(Screen::FeePayments))
                />
                <ActionCard
                    icon="⏰"
                    title="Pending Fees"
                    subtitle="Students with dues"
                    on_click=Callback::new(move |_| ctx.navigate(Screen::FeesPending))
                />
                <ActionCard
                    icon="📈"
                    title="Analytics"
                    subtitle="Collection overview below"
                    on_click=Callback::new(move |_| {})
                />
            </div>

            <Show when=move || analytics.get().is_some()>
                <div class="stat-grid">
                    <StatCard
                        label="Students"
                        value=Signal::derive(move || {
                            fmt_count(analytics.get().and_then(|a| a.total_students))
                        })
                    />
                    <StatCard
                        label="Total Fees"
                        value=Signal::derive(move || {
                            fmt_money(analytics.get().and_then(|a| a.total_yearly_fees))
                        })
                    />
                    <StatCard
                        label="Collected"
                        value=Signal::derive(move || {
                            fmt_money(analytics.get().and_then(|a| a.total_collected))
                        })
                        accent="success"
                    />
                    <StatCard
                        label="Pending"
                        value=Signal::derive(move || {
                            fmt_money(analytics.get().and_then(|a| a.total_pending))
                        })
                        accent="danger"
                    />
                </div>
            </Show>
        </div>
    }
}
