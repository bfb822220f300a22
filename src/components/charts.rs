//! Chart Components
//!
//! Hand-rolled SVG bar and donut charts for the dashboard. All
//! geometry comes from `crate::charts`; these components only emit
//! markup.

use leptos::prelude::*;

use crate::charts::{bar_layout, donut_slices};

#[component]
pub fn BarChart(#[prop(into)] data: Signal<Vec<(String, u32)>>) -> impl IntoView {
    view! {
        <Show
            when=move || !data.get().is_empty()
            fallback=|| view! { <p class="chart-empty">"No data available"</p> }
        >
            <svg class="chart" viewBox="0 0 320 180" preserveAspectRatio="xMidYMid meet">
                {move || {
                    bar_layout(&data.get(), 320.0, 150.0)
                        .into_iter()
                        .map(|bar| {
                            let center = format!("{:.2}", bar.x + bar.width / 2.0);
                            view! {
                                <rect
                                    x=format!("{:.2}", bar.x)
                                    y=format!("{:.2}", bar.y)
                                    width=format!("{:.2}", bar.width)
                                    height=format!("{:.2}", bar.height)
                                    rx="4"
                                    fill="#6366f1"
                                />
                                <text x=center y="168" text-anchor="middle" class="chart-label">
                                    {bar.label}
                                </text>
                            }
                        })
                        .collect_view()
                }}
            </svg>
        </Show>
    }
}

#[component]
pub fn DonutChart(#[prop(into)] data: Signal<Vec<(String, f64)>>) -> impl IntoView {
    view! {
        <Show
            when=move || !data.get().is_empty()
            fallback=|| view! { <p class="chart-empty">"No data available"</p> }
        >
            {move || {
                let slices = donut_slices(&data.get(), 80.0, 80.0, 70.0, 45.0);

                let paths = slices
                    .iter()
                    .map(|slice| {
                        let d = slice.path.clone();
                        let color = slice.color;
                        view! { <path d=d fill=color /> }
                    })
                    .collect_view();

                let legend = slices
                    .into_iter()
                    .map(|slice| {
                        let share = format!("{:.0}%", slice.fraction * 100.0);
                        view! {
                            <div class="legend-row">
                                <span
                                    class="legend-dot"
                                    style=format!("background:{}", slice.color)
                                ></span>
                                <span class="legend-label">{slice.label}</span>
                                <span class="legend-share">{share}</span>
                            </div>
                        }
                    })
                    .collect_view();

                view! {
                    <div class="donut-wrap">
                        <svg class="chart donut" viewBox="0 0 160 160">{paths}</svg>
                        <div class="chart-legend">{legend}</div>
                    </div>
                }
            }}
        </Show>
    }
}
