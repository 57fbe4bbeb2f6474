//! Authenticated dashboard: live telemetry, alerts, and crop image analysis.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the product's home screen. Telemetry comes through the shared
//! cache so navigating back renders warm; the crop-image analyzer is the
//! only upload path and folds its result back into that cache so the
//! insight views agree with what the farmer just scanned.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::stat_card::StatCard;
use crate::net::types::{AnalysisResult, TelemetrySnapshot};
use crate::state::auth::AuthState;
use crate::state::telemetry::{self, TelemetryCache};
use crate::util::guard::should_redirect_unauth;
use crate::util::preview::SelectedImage;
use crate::util::scope::RequestScope;

/// Formatted values for the stat-card row. Placeholders until the first
/// snapshot lands.
#[derive(Clone, Debug, PartialEq)]
struct OverviewLabels {
    moisture: String,
    solar: String,
    health: String,
    alerts: String,
}

fn overview_labels(snapshot: Option<&TelemetrySnapshot>) -> OverviewLabels {
    match snapshot {
        None => OverviewLabels {
            moisture: "--".to_owned(),
            solar: "--".to_owned(),
            health: "--".to_owned(),
            alerts: "0".to_owned(),
        },
        Some(data) => OverviewLabels {
            moisture: format!("{}%", data.soil),
            solar: format!("{}W", data.solar_output),
            health: format!("{}/100", data.crop_health),
            alerts: data.suggestions.len().to_string(),
        },
    }
}

/// Confidence as a whole percentage, `N/A` when the model gave none.
fn confidence_label(confidence: Option<f64>) -> String {
    match confidence {
        Some(value) => format!("{}%", (value * 100.0).round()),
        None => "N/A".to_owned(),
    }
}

/// The free-text line under the analysis results: server message first,
/// then the recommended action, then a shrug.
fn analysis_note(result: &AnalysisResult) -> String {
    result
        .message
        .clone()
        .or_else(|| result.recommended_action.clone())
        .unwrap_or_else(|| "No additional information".to_owned())
}

/// Disease label for the disclosure panel: the fresh result wins over
/// whatever the snapshot remembered.
fn disease_name(result: Option<&AnalysisResult>, snapshot: Option<&TelemetrySnapshot>) -> String {
    result
        .and_then(|r| r.prediction.clone())
        .or_else(|| snapshot.and_then(|s| s.predicted_class.clone()))
        .unwrap_or_else(|| "Unknown".to_owned())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cache = expect_context::<TelemetryCache>();

    // Redirect to login if not authenticated.
    let navigate = use_navigate();
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });

    let warm = cache.get();
    let loading = RwSignal::new(warm.is_none());
    let snapshot = RwSignal::new(warm);
    let fetching = RwSignal::new(false);
    let analysis = RwSignal::new(None::<AnalysisResult>);
    let selected = RwSignal::new_local(None::<SelectedImage>);

    let scope = RequestScope::new();
    {
        let scope = scope.clone();
        on_cleanup(move || scope.cancel());
    }

    // First load: warm render from the cache, network only when stale. A
    // failure with nothing cached raises the blocking alert.
    #[cfg(feature = "hydrate")]
    {
        let cache = cache.clone();
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let loaded = cache.load_if_stale(crate::net::api::fetch_telemetry).await;
            if !scope.is_alive() {
                return;
            }
            match loaded {
                Ok(data) => snapshot.set(Some(data)),
                Err(err) => {
                    leptos::logging::warn!("telemetry fetch failed: {err}");
                    if snapshot.get_untracked().is_none() {
                        crate::util::dialog::alert(&format!("Failed to load data: {err}"));
                    }
                }
            }
            loading.set(false);
        });
    }

    let on_fetch = {
        let cache = cache.clone();
        let scope = scope.clone();
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                let cache = cache.clone();
                let scope = scope.clone();
                fetching.set(true);
                leptos::task::spawn_local(async move {
                    let loaded = cache.refresh(crate::net::api::fetch_telemetry).await;
                    if !scope.is_alive() {
                        return;
                    }
                    match loaded {
                        Ok(data) => snapshot.set(Some(data)),
                        Err(err) => {
                            leptos::logging::warn!("telemetry fetch failed: {err}");
                            if snapshot.get_untracked().is_none() {
                                crate::util::dialog::alert(&format!("Failed to load data: {err}"));
                            }
                        }
                    }
                    fetching.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&cache, &scope);
            }
        }
    };

    let overview = Memo::new(move |_| overview_labels(snapshot.get().as_ref()));

    view! {
        <div class="dashboard-page">
            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="dashboard-page__loading">
                            <h2>"Loading Smart Agro Dashboard"</h2>
                            <p>"Optimizing your farming data..."</p>
                        </div>
                    }
                }
            >
                <header class="dashboard-page__header">
                    <h1>"Smart Agro-Solar Dashboard"</h1>
                    <p>"Monitoring 3.4M data points for recyclable energy optimization"</p>
                </header>

                <div class="dashboard-page__stats">
                    <StatCard
                        href="/insights/soil"
                        label="Soil Moisture"
                        value=Signal::derive(move || overview.get().moisture)
                    />
                    <StatCard
                        href="/insights/solar"
                        label="Solar Output"
                        value=Signal::derive(move || overview.get().solar)
                    />
                    <StatCard
                        href="/insights/crop"
                        label="Crop Health"
                        value=Signal::derive(move || overview.get().health)
                    />
                    <StatCard
                        href="/insights/system"
                        label="Active Alerts"
                        value=Signal::derive(move || overview.get().alerts)
                    />
                </div>

                <div class="dashboard-page__panels">
                    <section class="panel dashboard-page__systems">
                        <h2>"Our Monitoring Systems"</h2>
                        <ul>
                            <li>"Soil moisture and pH sensing"</li>
                            <li>"Solar output tracking"</li>
                            <li>"Crop health imaging"</li>
                        </ul>
                    </section>

                    <section class="panel dashboard-page__alerts">
                        <h2>"System Alerts"</h2>
                        {move || {
                            let suggestions =
                                snapshot.get().map(|data| data.suggestions).unwrap_or_default();
                            let alerts = telemetry::alerts_from_suggestions(&suggestions);
                            if alerts.is_empty() {
                                view! { <p class="panel__empty">"No active alerts."</p> }.into_any()
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
                                                        {alert.critical.then(|| {
                                                            view! {
                                                                <span class="alert-list__badge">"Critical"</span>
                                                            }
                                                        })}
                                                        <span class="alert-list__message">{alert.message}</span>
                                                        <span class="alert-list__time">"Now"</span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                .into_any()
                            }
                        }}
                    </section>

                    <section class="panel dashboard-page__optimizers">
                        <h2>"Main Optimizers"</h2>
                        <ul>
                            <li>"Irrigation scheduling from live soil moisture"</li>
                            <li>"Panel tilt guidance from irradiance trends"</li>
                            <li>"Harvest timing from growth-stage tracking"</li>
                        </ul>
                    </section>

                    <section class="panel dashboard-page__disclosure">
                        <h2>"Smart Disclosure"</h2>
                        {move || {
                            let data = snapshot.get().unwrap_or_default();
                            let result = analysis.get();
                            let crop = telemetry::crop_health_view(&data, result.is_some());
                            let name = disease_name(result.as_ref(), snapshot.get().as_ref());
                            view! {
                                <dl class="disclosure">
                                    <dt>"Disease Name"</dt>
                                    <dd>{name}</dd>
                                    <dt>"Risk"</dt>
                                    <dd>{format!("{}% risk detected", crop.disease_risk)}</dd>
                                    <dt>"Growth Stage"</dt>
                                    <dd>{crop.growth_stage}</dd>
                                    <dt>"Last Scan"</dt>
                                    <dd>{crop.last_scan}</dd>
                                </dl>
                            }
                        }}
                    </section>
                </div>

                <AnalysisPanel
                    selected=selected
                    analysis=analysis
                    snapshot=snapshot
                    cache=cache.clone()
                    scope=scope.clone()
                />

                <section class="panel dashboard-page__data">
                    <h2>"Data Management"</h2>
                    <p>"Click to fetch and update your latest agricultural data"</p>
                    <button class="btn" on:click=on_fetch.clone() disabled=move || fetching.get()>
                        {move || if fetching.get() { "Fetching Data..." } else { "Fetch Data" }}
                    </button>
                </section>

                <section class="dashboard-page__cta">
                    <h2>"Ready to revolutionize your farm?"</h2>
                    <a class="btn dashboard-page__cta-link" href="/contact">"Contact Us Today"</a>
                </section>
            </Show>
        </div>
    }
}

/// Crop image analysis: pick or paste an image, upload it, fold the
/// result into the shared snapshot.
#[component]
fn AnalysisPanel(
    selected: RwSignal<Option<SelectedImage>, LocalStorage>,
    analysis: RwSignal<Option<AnalysisResult>>,
    snapshot: RwSignal<Option<TelemetrySnapshot>>,
    cache: TelemetryCache,
    scope: RequestScope,
) -> impl IntoView {
    let uploading = RwSignal::new(false);

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let input = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
            if let Some(file) = input.and_then(|input| input.files()).and_then(|files| files.get(0)) {
                select_file(selected, analysis, file);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_paste = move |ev: leptos::ev::ClipboardEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(file) = first_pasted_image(&ev) {
                ev.prevent_default();
                select_file(selected, analysis, file);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_analyze = {
        let cache = cache.clone();
        let scope = scope.clone();
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                let Some(image) = selected.get_untracked() else {
                    return;
                };
                if uploading.get_untracked() {
                    return;
                }
                let cache = cache.clone();
                let scope = scope.clone();
                uploading.set(true);
                leptos::task::spawn_local(async move {
                    let outcome = crate::net::api::analyze_image(&image, &scope).await;
                    if !scope.is_alive() {
                        return;
                    }
                    match outcome {
                        Ok(result) => {
                            snapshot.set(Some(cache.merge_analysis(&result)));
                            analysis.set(Some(result));
                        }
                        Err(err) => {
                            leptos::logging::warn!("image analysis failed: {err}");
                            analysis.set(Some(AnalysisResult::failure()));
                        }
                    }
                    uploading.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&cache, &scope);
            }
        }
    };

    let on_remove = move |_| {
        selected.set(None);
        analysis.set(None);
        if let Some(data) = cache.reset_analysis() {
            snapshot.set(Some(data));
        }
    };

    view! {
        <section class="panel analysis-panel">
            <h2>"Crop Image Analysis"</h2>
            <div class="analysis-panel__dropzone" on:paste=on_paste>
                <Show
                    when=move || selected.get().is_some()
                    fallback=|| {
                        view! { <p class="analysis-panel__hint">"Upload or paste crop image"</p> }
                    }
                >
                    <img
                        class="analysis-panel__preview"
                        src=move || selected.get().map(|image| image.preview_url()).unwrap_or_default()
                        alt="Selected crop"
                    />
                    <p class="analysis-panel__name">
                        {move || selected.get().map(|image| image.name()).unwrap_or_default()}
                    </p>
                </Show>
                <label class="btn analysis-panel__browse">
                    "Browse Files"
                    <input
                        class="analysis-panel__file"
                        type="file"
                        accept="image/*"
                        on:change=on_file_change
                    />
                </label>
                <p class="analysis-panel__limits">"Supports JPG, PNG (Max 5MB)"</p>
                <p class="analysis-panel__tip">"Tip: You can also paste (Ctrl+V) an image directly"</p>
            </div>

            <Show when=move || selected.get().is_some()>
                <div class="analysis-panel__actions">
                    <button class="btn" on:click=on_analyze.clone() disabled=move || uploading.get()>
                        {move || if uploading.get() { "Analyzing..." } else { "Analyze Image" }}
                    </button>
                    <button class="btn analysis-panel__remove" on:click=on_remove.clone()>"Remove"</button>
                </div>
            </Show>

            <Show when=move || analysis.get().is_some()>
                <div class="analysis-panel__results">
                    <h3>"Analysis Results"</h3>
                    <p class="analysis-panel__line">
                        "Prediction: "
                        {move || {
                            analysis
                                .get()
                                .and_then(|result| result.prediction)
                                .unwrap_or_else(|| "Unknown".to_owned())
                        }}
                    </p>
                    <p class="analysis-panel__line">
                        "Confidence: "
                        {move || confidence_label(analysis.get().and_then(|result| result.confidence))}
                    </p>
                    <p
                        class="analysis-panel__note"
                        class:analysis-panel__note--error=move || {
                            analysis.get().is_some_and(|result| result.error)
                        }
                    >
                        {move || analysis.get().map(|result| analysis_note(&result)).unwrap_or_default()}
                    </p>
                </div>
            </Show>
        </section>
    }
}

/// Swap in a new selection; the old preview URL is revoked when its guard
/// drops. A stale result never describes a new image, so it is cleared.
#[cfg(feature = "hydrate")]
fn select_file(
    selected: RwSignal<Option<SelectedImage>, LocalStorage>,
    analysis: RwSignal<Option<AnalysisResult>>,
    file: web_sys::File,
) {
    match SelectedImage::from_file(file) {
        Some(image) => {
            selected.set(Some(image));
            analysis.set(None);
        }
        None => leptos::logging::warn!("could not create a preview for the selected file"),
    }
}

#[cfg(feature = "hydrate")]
fn first_pasted_image(ev: &web_sys::ClipboardEvent) -> Option<web_sys::File> {
    let items = ev.clipboard_data()?.items();
    for index in 0..items.length() {
        if let Some(item) = items.get(index)
            && item.type_().contains("image")
        {
            return item.get_as_file().ok().flatten();
        }
    }
    None
}
