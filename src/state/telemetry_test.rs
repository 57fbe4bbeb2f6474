use std::cell::Cell;
use std::future::ready;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;

fn test_clock() -> (Rc<Cell<f64>>, TelemetryCache) {
    let now = Rc::new(Cell::new(1_000.0));
    let clock = Rc::clone(&now);
    let cache = TelemetryCache::with_clock(move || clock.get());
    (now, cache)
}

fn sample_snapshot() -> TelemetrySnapshot {
    TelemetrySnapshot {
        soil: 41.0,
        temperature: 27.5,
        humidity: 58.0,
        solar_output: 4.6,
        crop_health: 88.0,
        suggestions: vec!["Increase irrigation".to_owned()],
        ..TelemetrySnapshot::default()
    }
}

fn sample_analysis() -> AnalysisResult {
    AnalysisResult {
        prediction: Some("Leaf Blight".to_owned()),
        confidence: Some(0.93),
        growth_stage: Some("Flowering".to_owned()),
        recommended_action: Some("Apply copper fungicide".to_owned()),
        disease_risk: 62.0,
        health_score: 71.0,
        ..AnalysisResult::default()
    }
}

fn counting_ok(calls: &Rc<Cell<u32>>) -> impl FnOnce() -> std::future::Ready<Result<TelemetrySnapshot, String>> {
    let calls = Rc::clone(calls);
    move || {
        calls.set(calls.get() + 1);
        ready(Ok(sample_snapshot()))
    }
}

// ============================================================================
// Expiry
// ============================================================================

#[test]
fn serves_cached_snapshot_until_expiry_then_refetches() {
    block_on(async {
        let (now, cache) = test_clock();
        let calls = Rc::new(Cell::new(0u32));

        let first = cache.load_if_stale(counting_ok(&calls)).await;
        assert_eq!(first, Ok(sample_snapshot()));
        assert_eq!(calls.get(), 1);

        now.set(1_000.0 + 60_000.0);
        let second = cache.load_if_stale(counting_ok(&calls)).await;
        assert_eq!(second, Ok(sample_snapshot()));
        assert_eq!(calls.get(), 1);

        now.set(1_000.0 + CACHE_EXPIRY_MS + 1.0);
        let third = cache.load_if_stale(counting_ok(&calls)).await;
        assert_eq!(third, Ok(sample_snapshot()));
        assert_eq!(calls.get(), 2);
    });
}

#[test]
fn snapshot_at_exact_expiry_age_is_still_fresh() {
    block_on(async {
        let (now, cache) = test_clock();
        let calls = Rc::new(Cell::new(0u32));

        let _ = cache.load_if_stale(counting_ok(&calls)).await;
        now.set(1_000.0 + CACHE_EXPIRY_MS);
        let _ = cache.load_if_stale(counting_ok(&calls)).await;
        assert_eq!(calls.get(), 1);
    });
}

#[test]
fn refresh_fetches_even_when_fresh() {
    block_on(async {
        let (_now, cache) = test_clock();
        let calls = Rc::new(Cell::new(0u32));

        let _ = cache.load_if_stale(counting_ok(&calls)).await;
        let again = cache.refresh(counting_ok(&calls)).await;
        assert_eq!(again, Ok(sample_snapshot()));
        assert_eq!(calls.get(), 2);
    });
}

// ============================================================================
// Single-Flight
// ============================================================================

#[test]
fn concurrent_stale_loads_share_one_fetch() {
    block_on(async {
        let (_now, cache) = test_clock();
        let calls = Rc::new(Cell::new(0u32));
        let (release, gate) = oneshot::channel::<()>();

        let fetch_calls = Rc::clone(&calls);
        let first = cache.load_if_stale(move || {
            fetch_calls.set(fetch_calls.get() + 1);
            async move {
                let _ = gate.await;
                Ok::<_, String>(sample_snapshot())
            }
        });
        let second = cache.load_if_stale(|| {
            ready(Err::<TelemetrySnapshot, String>("second fetch started".to_owned()))
        });

        let joined = async { futures::join!(first, second) };
        futures::pin_mut!(joined);
        assert!(futures::poll!(joined.as_mut()).is_pending());
        release.send(()).unwrap();

        let (a, b) = joined.await;
        assert_eq!(a, Ok(sample_snapshot()));
        assert_eq!(b, Ok(sample_snapshot()));
        assert_eq!(calls.get(), 1);
    });
}

// ============================================================================
// Failure
// ============================================================================

#[test]
fn failed_fetch_leaves_empty_cache_retriable() {
    block_on(async {
        let (_now, cache) = test_clock();
        let calls = Rc::new(Cell::new(0u32));

        let outcome = cache
            .load_if_stale(|| ready(Err::<TelemetrySnapshot, String>("Server error: 500".to_owned())))
            .await;
        assert_eq!(outcome, Err("Server error: 500".to_owned()));
        assert_eq!(cache.get(), None);

        let retried = cache.load_if_stale(counting_ok(&calls)).await;
        assert_eq!(retried, Ok(sample_snapshot()));
        assert_eq!(calls.get(), 1);
    });
}

#[test]
fn failed_refresh_keeps_previous_snapshot() {
    block_on(async {
        let (now, cache) = test_clock();
        let calls = Rc::new(Cell::new(0u32));

        let _ = cache.load_if_stale(counting_ok(&calls)).await;
        now.set(1_000.0 + CACHE_EXPIRY_MS + 1.0);
        let outcome = cache
            .refresh(|| ready(Err::<TelemetrySnapshot, String>("Server error: 502".to_owned())))
            .await;
        assert_eq!(outcome, Err("Server error: 502".to_owned()));
        assert_eq!(cache.get(), Some(sample_snapshot()));
    });
}

// ============================================================================
// Analysis Merge / Reset
// ============================================================================

#[test]
fn merge_overwrites_exactly_the_analysis_fields() {
    let base = TelemetrySnapshot {
        ph: Some(6.4),
        irrigation: "ON".to_owned(),
        daily_production: Some(3.9),
        ..sample_snapshot()
    };
    let merged = merge_snapshot(base, &sample_analysis());

    assert_eq!(merged.disease_risk, 62.0);
    assert_eq!(merged.growth_stage, Some("Flowering".to_owned()));
    assert_eq!(merged.crop_health, 71.0);
    assert_eq!(merged.predicted_class, Some("Leaf Blight".to_owned()));
    assert_eq!(merged.confidence, Some(0.93));
    assert_eq!(merged.recommended_action, Some("Apply copper fungicide".to_owned()));

    assert_eq!(merged.soil, 41.0);
    assert_eq!(merged.temperature, 27.5);
    assert_eq!(merged.humidity, 58.0);
    assert_eq!(merged.solar_output, 4.6);
    assert_eq!(merged.ph, Some(6.4));
    assert_eq!(merged.irrigation, "ON");
    assert_eq!(merged.daily_production, Some(3.9));
    assert_eq!(merged.suggestions, vec!["Increase irrigation".to_owned()]);
}

#[test]
fn merge_restamps_a_stale_cache_back_to_fresh() {
    block_on(async {
        let (now, cache) = test_clock();
        let calls = Rc::new(Cell::new(0u32));

        let _ = cache.load_if_stale(counting_ok(&calls)).await;
        now.set(1_000.0 + CACHE_EXPIRY_MS + 1.0);
        let merged = cache.merge_analysis(&sample_analysis());

        let served = cache
            .load_if_stale(|| ready(Err::<TelemetrySnapshot, String>("unexpected fetch".to_owned())))
            .await;
        assert_eq!(served, Ok(merged));
    });
}

#[test]
fn merge_on_empty_cache_starts_from_defaults() {
    let (_now, cache) = test_clock();
    let merged = cache.merge_analysis(&sample_analysis());
    assert_eq!(merged.soil, 0.0);
    assert_eq!(merged.disease_risk, 62.0);
    assert_eq!(cache.get(), Some(merged));
}

#[test]
fn reset_clears_disease_fields_without_restamping() {
    block_on(async {
        let (now, cache) = test_clock();
        let calls = Rc::new(Cell::new(0u32));

        let _ = cache.load_if_stale(counting_ok(&calls)).await;
        let _ = cache.merge_analysis(&sample_analysis());

        now.set(11_000.0);
        let reset = cache.reset_analysis().unwrap();
        assert_eq!(reset.disease_risk, 0.0);
        assert_eq!(reset.predicted_class, None);
        assert_eq!(reset.confidence, None);
        assert_eq!(reset.recommended_action, None);
        assert_eq!(reset.growth_stage, Some("Flowering".to_owned()));
        assert_eq!(reset.crop_health, 71.0);
        assert_eq!(reset.soil, 41.0);

        now.set(1_000.0 + CACHE_EXPIRY_MS + 1.0);
        let _ = cache.load_if_stale(counting_ok(&calls)).await;
        assert_eq!(calls.get(), 2);
    });
}

#[test]
fn reset_on_empty_cache_is_a_noop() {
    let (_now, cache) = test_clock();
    assert_eq!(cache.reset_analysis(), None);
    assert_eq!(cache.get(), None);
}

// ============================================================================
// Alerts
// ============================================================================

#[test]
fn suggestions_become_ordered_alerts_with_one_based_ids() {
    let suggestions = vec![
        "Increase irrigation".to_owned(),
        "⚠️ Pest risk high".to_owned(),
        "🔥 Heat stress likely".to_owned(),
    ];
    let alerts = alerts_from_suggestions(&suggestions);
    assert_eq!(alerts.len(), 3);
    assert_eq!(alerts[0].id, 1);
    assert_eq!(alerts[0].message, "Increase irrigation");
    assert!(!alerts[0].critical);
    assert!(alerts[1].critical);
    assert!(alerts[2].critical);
    assert_eq!(alerts[2].id, 3);
}

// ============================================================================
// Card Views
// ============================================================================

#[test]
fn soil_view_falls_back_to_neutral_ph() {
    let view = soil_readings(&sample_snapshot());
    assert_eq!(view.moisture, 41.0);
    assert_eq!(view.ph, 6.8);
    assert_eq!(view.temperature, 27.5);
    assert_eq!(view.humidity, 58.0);

    let measured = TelemetrySnapshot {
        ph: Some(6.1),
        ..sample_snapshot()
    };
    assert_eq!(soil_readings(&measured).ph, 6.1);
}

#[test]
fn solar_view_falls_back_to_rated_figures() {
    let view = solar_readings(&sample_snapshot());
    assert_eq!(view.output, 4.6);
    assert_eq!(view.daily_production, 3.2);
    assert_eq!(view.efficiency, 82.0);
    assert_eq!(view.battery_level, 75.0);

    let measured = TelemetrySnapshot {
        daily_production: Some(5.1),
        efficiency: Some(91.0),
        battery_level: Some(40.0),
        ..sample_snapshot()
    };
    let view = solar_readings(&measured);
    assert_eq!(view.daily_production, 5.1);
    assert_eq!(view.efficiency, 91.0);
    assert_eq!(view.battery_level, 40.0);
}

#[test]
fn crop_view_defaults_growth_stage_and_scan_label() {
    let view = crop_health_view(&sample_snapshot(), false);
    assert_eq!(view.health, 88.0);
    assert_eq!(view.growth_stage, "Vegetative");
    assert_eq!(view.last_scan, "No recent scan");

    let analyzed = merge_snapshot(sample_snapshot(), &sample_analysis());
    let view = crop_health_view(&analyzed, true);
    assert_eq!(view.growth_stage, "Flowering");
    assert_eq!(view.last_scan, "Just now");
}
