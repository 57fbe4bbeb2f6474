//! Wire DTOs for the Smart Agro HTTP API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON exactly: sensor readings are
//! snake_case, analysis fields are camelCase, mapped with per-field
//! renames. Every telemetry field defaults so a sparse payload still
//! deserializes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Server-shaped user record from the auth endpoints.
///
/// Only display fields are modeled. Anything else the server sends (state,
/// district, provider ids) rides along in `extra` untouched; the client
/// never validates profile shape beyond presence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// Best display label: full name, else username, else email.
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .or_else(|| self.username.clone())
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "Account".to_owned())
    }
}

/// Response of `GET /api/auth/check`: the server's verdict on the current
/// session cookie.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthCheck {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Full telemetry object from `POST /api/analyze-data`, plus the analysis
/// fields a crop-image scan merges in client-side. The merged fields stay
/// absent (or zero) until a scan completes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// Soil moisture in percent.
    #[serde(default)]
    pub soil: f64,
    /// Soil temperature in degrees Celsius.
    #[serde(default)]
    pub temperature: f64,
    /// Relative humidity in percent.
    #[serde(default)]
    pub humidity: f64,
    /// Solar irradiance in W/m2.
    #[serde(default)]
    pub irradiance: f64,
    /// Ambient light in lux.
    #[serde(default)]
    pub light: f64,
    /// Irrigation model verdict (`"Yes"` / `"No"`).
    #[serde(default)]
    pub irrigation: String,
    #[serde(default)]
    pub irrigation_needed: String,
    /// Predicted panel output in watts.
    #[serde(default)]
    pub solar_output: f64,
    /// Crop health score out of 100.
    #[serde(default)]
    pub crop_health: f64,
    /// Advisory strings; entries carrying warning emoji are critical.
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub ph: Option<f64>,
    #[serde(default, rename = "dailyProduction")]
    pub daily_production: Option<f64>,
    #[serde(default)]
    pub efficiency: Option<f64>,
    #[serde(default, rename = "batteryLevel")]
    pub battery_level: Option<f64>,
    /// Disease risk in percent, merged from the last image analysis.
    #[serde(default, rename = "diseaseRisk")]
    pub disease_risk: f64,
    #[serde(default, rename = "growthStage")]
    pub growth_stage: Option<String>,
    #[serde(default, rename = "predictedClass")]
    pub predicted_class: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default, rename = "recommendedAction")]
    pub recommended_action: Option<String>,
}

/// Response of `POST /api/analyze` for an uploaded crop image.
///
/// `error` is never sent by the server; it is set client-side to render an
/// upload failure in place of results.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub prediction: Option<String>,
    pub confidence: Option<f64>,
    pub disease_risk: f64,
    pub growth_stage: Option<String>,
    pub health_score: f64,
    pub recommended_action: Option<String>,
    pub message: Option<String>,
    pub error: bool,
}

impl AnalysisResult {
    /// In-place failure rendering for a rejected or failed upload.
    pub fn failure() -> Self {
        Self {
            error: true,
            message: Some("Analysis failed. Please try again.".to_owned()),
            ..Self::default()
        }
    }
}

/// Credential pair for `POST /api/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration form for `POST /api/auth/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub username: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub state: String,
    pub district: String,
    pub village: String,
}

/// Body for `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Generic `{message}` body the server attaches to error responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: String,
}
