//! Stat Card Components
//!
//! Dashboard tiles and the quick-action cards on the fees screen, plus
//! the number formatting used on them. Values arrive as options; a
//! missing value renders as a dash instead of a zero.

use leptos::prelude::*;

pub fn fmt_count(value: Option<u32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Rupee amounts come back already computed; no client-side arithmetic
pub fn fmt_money(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("₹ {v}"),
        None => "-".to_string(),
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] accent: String,
) -> impl IntoView {
    let card_class = if accent.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card {accent}")
    };

    view! {
        <div class=card_class>
            <div class="stat-label">{label}</div>
            <div class="stat-value">{move || value.get()}</div>
        </div>
    }
}

#[component]
pub fn ActionCard(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button class="action-card" on:click=move |_| on_click.run(())>
            <div class="action-icon">{icon}</div>
            <div class="action-title">{title}</div>
            <div class="action-sub">{subtitle}</div>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_count_dash_for_missing() {
        assert_eq!(fmt_count(Some(42)), "42");
        assert_eq!(fmt_count(None), "-");
    }

    #[test]
    fn test_fmt_money_whole_and_fractional() {
        // Whole rupee amounts print without a decimal tail
        assert_eq!(fmt_money(Some(4500.0)), "₹ 4500");
        assert_eq!(fmt_money(Some(99.5)), "₹ 99.5");
        assert_eq!(fmt_money(None), "-");
    }
}
