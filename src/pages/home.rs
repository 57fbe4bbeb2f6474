//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Smart farming, powered by the sun"</h1>
                <p class="home-page__lead">
                    "Soil sensors, solar production, and crop health analysis in one dashboard for your farm."
                </p>
                <a class="btn home-page__cta" href="/signup">"Get Started"</a>
            </section>
            <section class="home-page__features">
                <div class="feature-card">
                    <h3>"Soil Monitoring"</h3>
                    <p>"Moisture, pH, and temperature readings straight from the field."</p>
                </div>
                <div class="feature-card">
                    <h3>"Solar Tracking"</h3>
                    <p>"Panel output, daily production, and battery levels at a glance."</p>
                </div>
                <div class="feature-card">
                    <h3>"Crop Health"</h3>
                    <p>"Upload a leaf photo and get a disease prediction in seconds."</p>
                </div>
            </section>
        </div>
    }
}
