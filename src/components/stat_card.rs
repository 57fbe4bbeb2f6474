//! Metric card linking into a detailed insight view.

use leptos::prelude::*;

/// A dashboard stat card: label, live value, and a link to the matching
/// insight page.
#[component]
pub fn StatCard(
    href: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <a class="stat-card" href=href>
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
        </a>
    }
}
