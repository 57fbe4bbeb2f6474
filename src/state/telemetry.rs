//! Telemetry snapshot cache with expiry and single-flight loading.
//!
//! DESIGN
//! ======
//! The dashboard and every insight view read the same snapshot, so it
//! lives here as app-level context instead of page state. A snapshot is
//! served from memory for five minutes; after that the next reader pays
//! one network round trip no matter how many readers arrive at once,
//! because concurrent stale readers join a single shared fetch future.
//! A failed fetch leaves the slot untouched so stale data survives a
//! flaky network.
//!
//! The clock is injected (milliseconds, `Date.now()` semantics) so expiry
//! behavior is testable without a browser.

#[cfg(test)]
#[path = "telemetry_test.rs"]
mod telemetry_test;

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(any(test, feature = "hydrate"))]
use futures::FutureExt;
#[cfg(any(test, feature = "hydrate"))]
use futures::future::{LocalBoxFuture, Shared};
use send_wrapper::SendWrapper;

use crate::net::types::{AnalysisResult, TelemetrySnapshot};

/// How long a snapshot stays fresh, in milliseconds.
pub const CACHE_EXPIRY_MS: f64 = 5.0 * 60.0 * 1000.0;

#[cfg(any(test, feature = "hydrate"))]
type SharedFetch = Shared<LocalBoxFuture<'static, Result<TelemetrySnapshot, String>>>;

#[derive(Default)]
struct Slot {
    data: Option<TelemetrySnapshot>,
    fetched_at: Option<f64>,
    #[cfg(any(test, feature = "hydrate"))]
    inflight: Option<SharedFetch>,
}

/// Cached telemetry shared across pages. Cheap to clone; clones share the
/// same slot.
///
/// The slot and clock stay single-threaded (`SendWrapper` satisfies the
/// `Send + Sync` bounds of Leptos context and view closures).
#[derive(Clone)]
pub struct TelemetryCache {
    slot: SendWrapper<Rc<RefCell<Slot>>>,
    clock: SendWrapper<Rc<dyn Fn() -> f64>>,
}

impl TelemetryCache {
    /// Cache backed by the real clock.
    pub fn new() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::with_clock(js_sys::Date::now)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::with_clock(|| 0.0)
        }
    }

    /// Cache with an injected millisecond clock.
    pub fn with_clock(clock: impl Fn() -> f64 + 'static) -> Self {
        Self {
            slot: SendWrapper::new(Rc::new(RefCell::new(Slot::default()))),
            clock: SendWrapper::new(Rc::new(clock)),
        }
    }

    /// The cached snapshot, if any, regardless of age.
    pub fn get(&self) -> Option<TelemetrySnapshot> {
        self.slot.borrow().data.clone()
    }

    fn is_fresh(&self) -> bool {
        let slot = self.slot.borrow();
        match (&slot.data, slot.fetched_at) {
            (Some(_), Some(at)) => (self.clock)() - at <= CACHE_EXPIRY_MS,
            _ => false,
        }
    }

    /// Serve from the cache when fresh, otherwise fetch.
    ///
    /// # Errors
    ///
    /// Propagates the fetch error; the slot keeps whatever it had.
    pub async fn load_if_stale<F, Fut>(&self, fetch: F) -> Result<TelemetrySnapshot, String>
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<TelemetrySnapshot, String>> + 'static,
    {
        if self.is_fresh() && let Some(data) = self.get() {
            return Ok(data);
        }
        self.load(fetch).await
    }

    /// Fetch unconditionally, still joining any fetch already in flight.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::load_if_stale`].
    pub async fn refresh<F, Fut>(&self, fetch: F) -> Result<TelemetrySnapshot, String>
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<TelemetrySnapshot, String>> + 'static,
    {
        self.load(fetch).await
    }

    #[cfg(any(test, feature = "hydrate"))]
    async fn load<F, Fut>(&self, fetch: F) -> Result<TelemetrySnapshot, String>
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<TelemetrySnapshot, String>> + 'static,
    {
        let existing = self.slot.borrow().inflight.clone();
        if let Some(shared) = existing {
            return shared.await;
        }
        let cache = self.clone();
        let shared = async move {
            let outcome = fetch().await;
            cache.settle(&outcome);
            outcome
        }
        .boxed_local()
        .shared();
        self.slot.borrow_mut().inflight = Some(shared.clone());
        // Detached driver: the cache outlives pages, so a fetch started by a
        // page that unmounts mid-flight still completes into the slot.
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local({
            let driver = shared.clone();
            async move {
                let _ = driver.await;
            }
        });
        shared.await
    }

    #[cfg(not(any(test, feature = "hydrate")))]
    async fn load<F, Fut>(&self, fetch: F) -> Result<TelemetrySnapshot, String>
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<TelemetrySnapshot, String>> + 'static,
    {
        let outcome = fetch().await;
        self.settle(&outcome);
        outcome
    }

    fn settle(&self, outcome: &Result<TelemetrySnapshot, String>) {
        let mut slot = self.slot.borrow_mut();
        #[cfg(any(test, feature = "hydrate"))]
        {
            slot.inflight = None;
        }
        if let Ok(data) = outcome {
            slot.data = Some(data.clone());
            slot.fetched_at = Some((self.clock)());
        }
    }

    /// Fold an analysis result into the cached snapshot and restamp it.
    /// An empty cache merges onto a default snapshot.
    pub fn merge_analysis(&self, result: &AnalysisResult) -> TelemetrySnapshot {
        let mut slot = self.slot.borrow_mut();
        let base = slot.data.clone().unwrap_or_default();
        let merged = merge_snapshot(base, result);
        slot.data = Some(merged.clone());
        slot.fetched_at = Some((self.clock)());
        merged
    }

    /// Drop the disease-related fields from the cached snapshot, keeping
    /// its timestamp. Returns the updated snapshot, `None` when the cache
    /// is empty.
    pub fn reset_analysis(&self) -> Option<TelemetrySnapshot> {
        let mut slot = self.slot.borrow_mut();
        let data = slot.data.as_mut()?;
        clear_analysis(data);
        Some(data.clone())
    }
}

impl Default for TelemetryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Overwrite exactly the analysis-derived fields, leaving sensor and solar
/// readings alone.
pub fn merge_snapshot(mut snapshot: TelemetrySnapshot, result: &AnalysisResult) -> TelemetrySnapshot {
    snapshot.disease_risk = result.disease_risk;
    snapshot.growth_stage = result.growth_stage.clone();
    snapshot.crop_health = result.health_score;
    snapshot.predicted_class = result.prediction.clone();
    snapshot.confidence = result.confidence;
    snapshot.recommended_action = result.recommended_action.clone();
    snapshot
}

/// Zero the disease-related fields in place. Growth stage and crop health
/// keep their last analyzed values.
pub fn clear_analysis(snapshot: &mut TelemetrySnapshot) {
    snapshot.disease_risk = 0.0;
    snapshot.predicted_class = None;
    snapshot.confidence = None;
    snapshot.recommended_action = None;
}

/// One entry in the system-alerts panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemAlert {
    pub id: usize,
    pub message: String,
    pub critical: bool,
}

/// Turn the snapshot's suggestion strings into alert entries. A message
/// carrying a warning or fire emoji is flagged critical.
pub fn alerts_from_suggestions(suggestions: &[String]) -> Vec<SystemAlert> {
    suggestions
        .iter()
        .enumerate()
        .map(|(index, message)| SystemAlert {
            id: index + 1,
            message: message.clone(),
            critical: message.contains("⚠️") || message.contains('🔥'),
        })
        .collect()
}

/// Soil card values with the UI fallbacks applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoilReadings {
    pub moisture: f64,
    pub ph: f64,
    pub temperature: f64,
    pub humidity: f64,
}

pub fn soil_readings(snapshot: &TelemetrySnapshot) -> SoilReadings {
    SoilReadings {
        moisture: snapshot.soil,
        ph: snapshot.ph.unwrap_or(6.8),
        temperature: snapshot.temperature,
        humidity: snapshot.humidity,
    }
}

/// Solar card values with the UI fallbacks applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolarReadings {
    pub output: f64,
    pub daily_production: f64,
    pub efficiency: f64,
    pub battery_level: f64,
}

pub fn solar_readings(snapshot: &TelemetrySnapshot) -> SolarReadings {
    SolarReadings {
        output: snapshot.solar_output,
        daily_production: snapshot.daily_production.unwrap_or(3.2),
        efficiency: snapshot.efficiency.unwrap_or(82.0),
        battery_level: snapshot.battery_level.unwrap_or(75.0),
    }
}

/// Crop card values with the UI fallbacks applied.
#[derive(Clone, Debug, PartialEq)]
pub struct CropHealthView {
    pub health: f64,
    pub disease_risk: f64,
    pub growth_stage: String,
    pub last_scan: String,
}

pub fn crop_health_view(snapshot: &TelemetrySnapshot, scanned: bool) -> CropHealthView {
    CropHealthView {
        health: snapshot.crop_health,
        disease_risk: snapshot.disease_risk,
        growth_stage: snapshot
            .growth_stage
            .clone()
            .unwrap_or_else(|| "Vegetative".to_owned()),
        last_scan: if scanned { "Just now" } else { "No recent scan" }.to_owned(),
    }
}
