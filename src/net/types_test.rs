use super::*;

// =============================================================
// TelemetrySnapshot
// =============================================================

#[test]
fn telemetry_deserializes_server_payload() {
    let payload = serde_json::json!({
        "soil": 42.5,
        "temperature": 28.1,
        "humidity": 61.0,
        "irradiance": 540.0,
        "light": 25000.0,
        "irrigation": "Yes",
        "solar_output": 4.37,
        "crop_health": 86.0,
        "irrigation_needed": "Yes",
        "suggestions": ["💧 Model predicts irrigation is required."]
    });
    let snapshot: TelemetrySnapshot = serde_json::from_value(payload).unwrap();
    assert_eq!(snapshot.soil, 42.5);
    assert_eq!(snapshot.irrigation, "Yes");
    assert_eq!(snapshot.solar_output, 4.37);
    assert_eq!(snapshot.suggestions.len(), 1);
    assert_eq!(snapshot.disease_risk, 0.0);
    assert_eq!(snapshot.ph, None);
}

#[test]
fn telemetry_tolerates_sparse_payload() {
    let snapshot: TelemetrySnapshot = serde_json::from_str("{}").unwrap();
    assert_eq!(snapshot, TelemetrySnapshot::default());
}

#[test]
fn telemetry_reads_camel_case_analysis_fields() {
    let payload = serde_json::json!({
        "diseaseRisk": 62.0,
        "growthStage": "Flowering",
        "predictedClass": "Tomato___Late_blight",
        "confidence": 0.93,
        "recommendedAction": "Apply copper fungicide",
        "dailyProduction": 3.9,
        "batteryLevel": 64.0
    });
    let snapshot: TelemetrySnapshot = serde_json::from_value(payload).unwrap();
    assert_eq!(snapshot.disease_risk, 62.0);
    assert_eq!(snapshot.growth_stage.as_deref(), Some("Flowering"));
    assert_eq!(snapshot.predicted_class.as_deref(), Some("Tomato___Late_blight"));
    assert_eq!(snapshot.daily_production, Some(3.9));
    assert_eq!(snapshot.battery_level, Some(64.0));
}

// =============================================================
// AnalysisResult
// =============================================================

#[test]
fn analysis_result_deserializes_and_ignores_unknown_fields() {
    let payload = serde_json::json!({
        "prediction": "Potato___Early_blight",
        "confidence": 0.88,
        "diseaseRisk": 88,
        "growthStage": "Vegetative",
        "affectedStage": "Leaves",
        "message": "Analysis complete"
    });
    let result: AnalysisResult = serde_json::from_value(payload).unwrap();
    assert_eq!(result.prediction.as_deref(), Some("Potato___Early_blight"));
    assert_eq!(result.disease_risk, 88.0);
    assert_eq!(result.health_score, 0.0);
    assert_eq!(result.message.as_deref(), Some("Analysis complete"));
    assert!(!result.error);
}

#[test]
fn analysis_failure_sets_flag_and_message() {
    let failure = AnalysisResult::failure();
    assert!(failure.error);
    assert_eq!(failure.message.as_deref(), Some("Analysis failed. Please try again."));
    assert_eq!(failure.prediction, None);
    assert_eq!(failure.disease_risk, 0.0);
}

// =============================================================
// Auth types
// =============================================================

#[test]
fn user_profile_display_name_prefers_full_name() {
    let profile = UserProfile {
        username: Some("ravi92".to_owned()),
        full_name: Some("Ravi Kumar".to_owned()),
        ..UserProfile::default()
    };
    assert_eq!(profile.display_name(), "Ravi Kumar");
}

#[test]
fn user_profile_display_name_falls_back_in_order() {
    let by_username = UserProfile {
        username: Some("ravi92".to_owned()),
        ..UserProfile::default()
    };
    assert_eq!(by_username.display_name(), "ravi92");

    let by_email = UserProfile {
        email: Some("ravi@farm.example".to_owned()),
        ..UserProfile::default()
    };
    assert_eq!(by_email.display_name(), "ravi@farm.example");

    assert_eq!(UserProfile::default().display_name(), "Account");
}

#[test]
fn user_profile_keeps_unknown_fields_in_extra() {
    let payload = serde_json::json!({
        "id": "6650a1",
        "username": "ravi92",
        "email": "ravi@farm.example",
        "fullName": "Ravi Kumar",
        "state": "Karnataka",
        "district": "Mandya",
        "village": "Halebidu"
    });
    let profile: UserProfile = serde_json::from_value(payload).unwrap();
    assert_eq!(profile.full_name.as_deref(), Some("Ravi Kumar"));
    assert_eq!(profile.extra.get("state"), Some(&serde_json::json!("Karnataka")));
    assert_eq!(profile.extra.get("id"), Some(&serde_json::json!("6650a1")));
}

#[test]
fn auth_check_defaults_to_anonymous() {
    let check: AuthCheck = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
    assert!(!check.authenticated);
    assert!(check.user.is_none());
}

#[test]
fn signup_request_serializes_camel_case_fields() {
    let request = SignupRequest {
        full_name: "Ravi Kumar".to_owned(),
        username: "ravi92".to_owned(),
        ..SignupRequest::default()
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value.get("fullName"), Some(&serde_json::json!("Ravi Kumar")));
    assert!(value.get("full_name").is_none());
}

#[test]
fn server_message_tolerates_missing_field() {
    let body: ServerMessage = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, "");
}
