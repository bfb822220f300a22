//! Dashboard Screen
//!
//! Landing screen: headline numbers, the class-wise bar chart, the
//! fees donut and the top performers list. The three fetches run in
//! parallel and land together; any failure leaves the tiles on their
//! dashes.

use futures::join;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{fmt_count, fmt_money, BarChart, DonutChart, StatCard};
use crate::models::{DashboardSummary, FeeAnalytics, StandardFees};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");

    let (summary, set_summary) = signal(DashboardSummary::default());
    let (analytics, set_analytics) = signal(FeeAnalytics::default());
    let (standard_fees, set_standard_fees) = signal(Vec::<StandardFees>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            let (summary_res, analytics_res, fees_res) = join!(
                api.dashboard_summary(),
                api.fee_analytics(),
                api.standard_wise_fees()
            );
            let loaded = summary_res.and_then(|s| {
                analytics_res.and_then(|a| fees_res.map(|f| (s, a, f)))
            });
            match loaded {
                Ok((s, a, f)) => {
                    web_sys::console::log_1(
                        &format!("[Dashboard] Loaded, {} class groups", f.len()).into(),
                    );
                    set_summary.set(s);
                    set_analytics.set(a);
                    set_standard_fees.set(f);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Dashboard] Load error: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    let class_bars = Signal::derive(move || {
        summary
            .get()
            .class_wise
            .iter()
            .map(|c| (format!("Std {}", c.standard), c.count))
            .collect::<Vec<_>>()
    });

    let fee_slices = Signal::derive(move || {
        standard_fees
            .get()
            .iter()
            .map(|f| (format!("Std {}", f.standard), f.total_fee))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page-body">
            <div class="page-head">
                <div>
                    <h2>"Dashboard"</h2>
                    <p class="muted">"Overview of students, fees & performance"</p>
                </div>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted">"Loading dashboard…"</p> }
            >
                <div class="stat-grid">
                    <StatCard
                        label="Students"
                        value=Signal::derive(move || fmt_count(summary.get().total_students))
                    />
                    <StatCard
                        label="Present Today"
                        value=Signal::derive(move || fmt_count(summary.get().present_today))
                    />
                    <StatCard
                        label="Pending Fees"
                        value=Signal::derive(move || fmt_money(analytics.get().total_pending))
                        accent="danger"
                    />
                    <StatCard
                        label="Collected Today"
                        value=Signal::derive(move || fmt_money(analytics.get().today_collected))
                        accent="success"
                    />
                    <StatCard
                        label="Yearly Fees"
                        value=Signal::derive(move || fmt_money(analytics.get().total_yearly_fees))
                    />
                    <StatCard
                        label="Collected"
                        value=Signal::derive(move || fmt_money(analytics.get().total_collected))
                        accent="success"
                    />
                </div>

                <div class="panel-grid">
                    <section class="panel">
                        <h2>"Class Wise Students"</h2>
                        <BarChart data=class_bars />
                    </section>

                    <section class="panel">
                        <h2>"Fees Distribution"</h2>
                        <DonutChart data=fee_slices />
                    </section>
                </div>

                <section class="panel">
                    <h2>"Top Performing Students"</h2>
                    <Show
                        when=move || !summary.get().top_students.is_empty()
                        fallback=|| view! { <p class="muted">"No topper data available"</p> }
                    >
                        <div class="topper-list">
                            <For
                                each=move || summary.get().top_students
                                key=|t| t.student_id.id.clone()
                                children=move |topper| {
                                    let standard = format!("Std {}", topper.student_id.standard);
                                    let percent = format!("{}%", topper.percentage);
                                    view! {
                                        <div class="topper-row">
                                            <span class="topper-name">{topper.student_id.name.clone()}</span>
                                            <span class="muted">{standard}</span>
                                            <span class="topper-score">{percent}</span>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </section>
            </Show>
        </div>
    }
}
