//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with session
//! cookies included on every auth and telemetry endpoint.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics. Non-2xx
//! responses surface the server's `{message}` body when one parses,
//! otherwise a formatted status message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AnalysisResult, AuthCheck, ContactMessage, Credentials, SignupRequest, TelemetrySnapshot};
#[cfg(feature = "hydrate")]
use super::types::ServerMessage;
use crate::util::preview::SelectedImage;
use crate::util::scope::RequestScope;

/// OAuth providers bridged through the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OauthProvider {
    Google,
    Github,
}

#[cfg(any(test, feature = "hydrate"))]
fn oauth_exchange_endpoint(provider: OauthProvider) -> String {
    match provider {
        OauthProvider::Google => crate::config::api_url("/api/auth/oauth/google"),
        OauthProvider::Github => crate::config::api_url("/api/auth/oauth/github/callback"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn check_failed_message(status: u16) -> String {
    format!("auth check failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn telemetry_failed_message(status: u16) -> String {
    format!("Server error: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn analysis_failed_message(status: u16) -> String {
    format!("analysis failed: {status}")
}

/// Pull the server's `{message}` out of an error response, falling back to
/// a status line when the body is not in that shape.
#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> String {
    match resp.json::<ServerMessage>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => request_failed_message(resp.status()),
    }
}

/// Ask the server whether the session cookie is live, via `GET /api/auth/check`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn check_session() -> Result<AuthCheck, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&crate::config::api_url("/api/auth/check"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(check_failed_message(resp.status()));
        }
        resp.json::<AuthCheck>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Post credentials to `POST /api/auth/login`.
///
/// A 2xx here is advisory only; session confirmation is the job of
/// [`check_session`].
///
/// # Errors
///
/// Returns the server's message (e.g. `Invalid credentials`) or a status
/// line on failure.
pub async fn login(credentials: &Credentials) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&crate::config::api_url("/api/auth/login"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// Register an account via `POST /api/auth/signup`. The server opens a
/// session on success.
///
/// # Errors
///
/// Returns the server's message (duplicate email/username, missing fields)
/// or a status line on failure.
pub async fn signup(request: &SignupRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&crate::config::api_url("/api/auth/signup"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// End the server session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error string if the request fails; callers treat this as
/// advisory and clear local state regardless.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&crate::config::api_url("/api/auth/logout"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Hand an OAuth payload to the backend for session creation.
///
/// Google sends the widget credential as a JSON body; GitHub sends the
/// authorization code as a query parameter.
///
/// # Errors
///
/// Returns the server's message (e.g. `Google login failed`) or a status
/// line on failure.
pub async fn oauth_exchange(provider: OauthProvider, payload: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match provider {
            OauthProvider::Google => {
                let body = serde_json::json!({ "credential": payload });
                gloo_net::http::Request::post(&oauth_exchange_endpoint(provider))
                    .credentials(web_sys::RequestCredentials::Include)
                    .json(&body)
                    .map_err(|e| e.to_string())?
                    .send()
                    .await
                    .map_err(|e| e.to_string())?
            }
            OauthProvider::Github => {
                gloo_net::http::Request::get(&oauth_exchange_endpoint(provider))
                    .credentials(web_sys::RequestCredentials::Include)
                    .query([("code", payload)])
                    .send()
                    .await
                    .map_err(|e| e.to_string())?
            }
        };
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (provider, payload);
        Err("not available on server".to_owned())
    }
}

/// Submit the contact form via `POST /api/contact`.
///
/// # Errors
///
/// Returns the server's message or a status line on failure.
pub async fn send_contact(message: &ContactMessage) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&crate::config::api_url("/api/contact"))
            .json(message)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err("not available on server".to_owned())
    }
}

/// Fetch a full telemetry snapshot via `POST /api/analyze-data`.
///
/// # Errors
///
/// Returns a `Server error: {status}` line or the transport error.
pub async fn fetch_telemetry() -> Result<TelemetrySnapshot, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "demo": true });
        let resp = gloo_net::http::Request::post(&crate::config::api_url("/api/analyze-data"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(telemetry_failed_message(resp.status()));
        }
        resp.json::<TelemetrySnapshot>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Upload a crop image to `POST /api/analyze` as multipart form data.
///
/// The request carries no credentials and is wired to the page's abort
/// signal so it dies with the dashboard.
///
/// # Errors
///
/// Returns a status line, the transport error, or the abort error when the
/// page tears down mid-flight.
pub async fn analyze_image(image: &SelectedImage, scope: &RequestScope) -> Result<AnalysisResult, String> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new().map_err(|_| "form construction failed".to_owned())?;
        form.append_with_blob_and_filename("image", image.file(), &image.name())
            .map_err(|_| "form construction failed".to_owned())?;
        let signal = scope.signal();
        let resp = gloo_net::http::Request::post(&crate::config::api_url("/api/analyze"))
            .abort_signal(signal.as_ref())
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(analysis_failed_message(resp.status()));
        }
        resp.json::<AnalysisResult>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (image, scope);
        Err("not available on server".to_owned())
    }
}
