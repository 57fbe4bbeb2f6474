//! Compile-time configuration for backend endpoints and OAuth clients.
//!
//! Values are baked in at build time via `option_env!` so the deployed WASM
//! bundle needs no runtime config fetch. Defaults target a local backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the Smart Agro backend API.
pub const API_BASE_URL: &str = match option_env!("SMARTAGRO_API_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Client id for the Google Identity Services widget.
pub const GOOGLE_CLIENT_ID: &str = match option_env!("SMARTAGRO_GOOGLE_CLIENT_ID") {
    Some(id) => id,
    None => "",
};

/// Client id for the GitHub authorization redirect.
pub const GITHUB_CLIENT_ID: &str = match option_env!("SMARTAGRO_GITHUB_CLIENT_ID") {
    Some(id) => id,
    None => "",
};

/// Join an absolute API path onto the backend base URL.
pub fn api_url(path: &str) -> String {
    format!("{API_BASE_URL}{path}")
}

/// GitHub authorize URL sending the user back to `{origin}/github/callback`.
pub fn github_authorize_url(origin: &str) -> String {
    format!(
        "https://github.com/login/oauth/authorize?client_id={GITHUB_CLIENT_ID}&redirect_uri={origin}/github/callback"
    )
}
