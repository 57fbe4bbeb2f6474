//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About Smart Agro"</h1>
            <p>
                "Smart Agro pairs field sensors with rooftop solar so small farms can see irrigation needs and panel performance in one place."
            </p>
            <p>
                "A trained crop model reads uploaded leaf photos and flags disease risk before it spreads, with recommendations growers can act on the same day."
            </p>
            <div class="about-page__facts">
                <div class="fact-card">
                    <span class="fact-card__value">"3.4M"</span>
                    <span class="fact-card__label">"data points monitored"</span>
                </div>
                <div class="fact-card">
                    <span class="fact-card__value">"4"</span>
                    <span class="fact-card__label">"insight views per farm"</span>
                </div>
            </div>
        </div>
    }
}
