//! Detailed insight views, one metric family per route.

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::auth::AuthState;
use crate::state::telemetry::{self, TelemetryCache};
use crate::util::guard::should_redirect_unauth;
use crate::util::scope::RequestScope;

/// Which family of readings an insights route shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsightKind {
    Soil,
    Solar,
    Crop,
    System,
}

impl InsightKind {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "soil" => Some(Self::Soil),
            "solar" => Some(Self::Solar),
            "crop" => Some(Self::Crop),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Soil => "Soil Insights",
            Self::Solar => "Solar Insights",
            Self::Crop => "Crop Insights",
            Self::System => "System Insights",
        }
    }
}

/// One labelled reading.
#[component]
fn ReadingCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="reading-card">
            <span class="reading-card__label">{label}</span>
            <span class="reading-card__value">{value}</span>
        </div>
    }
}

#[component]
pub fn InsightsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cache = expect_context::<TelemetryCache>();
    let params = use_params_map();

    // Redirect to login if not authenticated.
    let navigate = use_navigate();
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });

    let snapshot = RwSignal::new(cache.get());

    let scope = RequestScope::new();
    {
        let scope = scope.clone();
        on_cleanup(move || scope.cancel());
    }

    // Warm render from the cache; refetch only when it has gone stale. The
    // fetch itself belongs to the cache and is never aborted, so the alive
    // check only guards this page's signal.
    #[cfg(feature = "hydrate")]
    {
        let cache = cache.clone();
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let loaded = cache.load_if_stale(crate::net::api::fetch_telemetry).await;
            if !scope.is_alive() {
                return;
            }
            if let Ok(data) = loaded {
                snapshot.set(Some(data));
            }
        });
    }

    let kind = Memo::new(move |_| {
        params
            .read()
            .get("kind")
            .and_then(|slug| InsightKind::from_slug(&slug))
    });

    view! {
        <div class="insights-page">
            <a class="insights-page__back" href="/dashboard">"Back to Dashboard"</a>
            {move || {
                let data = snapshot.get().unwrap_or_default();
                match kind.get() {
                    None => {
                        view! { <p class="insights-page__missing">"Page not found."</p> }.into_any()
                    }
                    Some(InsightKind::Soil) => {
                        let soil = telemetry::soil_readings(&data);
                        view! {
                            <h1>{InsightKind::Soil.title()}</h1>
                            <div class="insights-page__grid">
                                <ReadingCard label="Soil Moisture" value=format!("{}%", soil.moisture) />
                                <ReadingCard label="Soil pH" value=soil.ph.to_string() />
                                <ReadingCard label="Temperature" value=format!("{}°C", soil.temperature) />
                                <ReadingCard label="Humidity" value=format!("{}%", soil.humidity) />
                            </div>
                        }
                        .into_any()
                    }
                    Some(InsightKind::Solar) => {
                        let solar = telemetry::solar_readings(&data);
                        view! {
                            <h1>{InsightKind::Solar.title()}</h1>
                            <div class="insights-page__grid">
                                <ReadingCard label="Panel Output" value=format!("{}W", solar.output) />
                                <ReadingCard label="Daily Production" value=format!("{} kWh", solar.daily_production) />
                                <ReadingCard label="Efficiency" value=format!("{}%", solar.efficiency) />
                                <ReadingCard label="Battery Level" value=format!("{}%", solar.battery_level) />
                            </div>
                        }
                        .into_any()
                    }
                    Some(InsightKind::Crop) => {
                        let scanned = data.predicted_class.is_some();
                        let crop = telemetry::crop_health_view(&data, scanned);
                        view! {
                            <h1>{InsightKind::Crop.title()}</h1>
                            <div class="insights-page__grid">
                                <ReadingCard label="Crop Health" value=format!("{}/100", crop.health) />
                                <ReadingCard label="Disease Risk" value=format!("{}% risk", crop.disease_risk) />
                                <ReadingCard label="Growth Stage" value=crop.growth_stage />
                                <ReadingCard label="Last Scan" value=crop.last_scan />
                            </div>
                        }
                        .into_any()
                    }
                    Some(InsightKind::System) => {
                        let alerts = telemetry::alerts_from_suggestions(&data.suggestions);
                        let body = if alerts.is_empty() {
                            view! { <p class="insights-page__empty">"No active alerts."</p> }
                                .into_any()
                        } else {
                            view! {
                                <ul class="alert-list">
                                    {alerts
                                        .into_iter()
                                        .map(|alert| {
                                            view! {
                                                <li
                                                    class="alert-list__item"
                                                    class:alert-list__item--critical=alert.critical
                                                >
                                                    <span class="alert-list__badge">
                                                        {if alert.critical { "Critical" } else { "Notice" }}
                                                    </span>
                                                    {alert.message}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                            .into_any()
                        };
                        view! {
                            <h1>{InsightKind::System.title()}</h1>
                            {body}
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}
