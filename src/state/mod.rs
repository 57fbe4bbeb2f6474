//! Shared reactive state provided at the application root.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two pieces of state outlive any single page: who is signed in
//! ([`auth::AuthState`]) and the last telemetry snapshot pulled from the
//! backend ([`telemetry::TelemetryCache`]). Both are provided as context
//! by the root component so route changes never lose them.

pub mod auth;
pub mod telemetry;
