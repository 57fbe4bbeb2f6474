//! # smartagro-client
//!
//! Leptos + WASM frontend for the Smart Agro agro-solar monitoring product.
//! Renders the soil/solar/crop dashboards, drives session authentication
//! against the backend (credentials, Google, GitHub), and uploads crop
//! photos for disease analysis.
//!
//! Pages and components read shared state (auth session, telemetry cache)
//! from Leptos context; the network layer is plain `gloo-net` calls behind
//! `hydrate`-gated stubs so unit tests run natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
