//! Session lifecycle: initialize, login, signup, OAuth, logout.
//!
//! DESIGN
//! ======
//! The server session cookie is the single source of truth. Every entry
//! point that might have opened a session (login, signup, OAuth exchange)
//! is followed by a `GET /api/auth/check` round trip, and only that check
//! flips local state to authenticated. A 2xx on the login POST with an
//! unconfirmed check is reported as "Session not created" rather than
//! trusted.
//!
//! Logout clears local state unconditionally. A failed logout request
//! leaves a cookie behind on the server, but keeping the UI signed in
//! because of a network blip would be worse.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{self, OauthProvider};
use crate::net::types::{AuthCheck, Credentials, SignupRequest};
use crate::state::auth::AuthState;

const SESSION_NOT_CREATED: &str = "Session not created";

/// Reset to the signed-out state.
fn clear_session(state: &mut AuthState) {
    state.user = None;
    state.authenticated = false;
    state.loading = false;
}

/// Fold a session-check result into local state. Returns whether the
/// server confirmed a live session with a user attached.
fn apply_check_outcome(state: &mut AuthState, checked: Result<AuthCheck, String>) -> bool {
    match checked {
        Ok(check) if check.authenticated && check.user.is_some() => {
            state.user = check.user;
            state.authenticated = true;
            state.loading = false;
            true
        }
        Ok(_) => {
            clear_session(state);
            false
        }
        Err(err) => {
            leptos::logging::warn!("session check failed: {err}");
            clear_session(state);
            false
        }
    }
}

/// Decide what a credential submission reports, given the POST result and
/// whether the follow-up check confirmed a session.
fn login_outcome(posted: Result<(), String>, confirmed: bool) -> Result<(), String> {
    if confirmed {
        return Ok(());
    }
    match posted {
        Ok(()) => Err(SESSION_NOT_CREATED.to_owned()),
        Err(err) => Err(err),
    }
}

/// Run a session-creating request, then the session check, strictly in
/// that order.
async fn login_sequence<P, C>(post: P, check: C) -> (Result<(), String>, Result<AuthCheck, String>)
where
    P: Future<Output = Result<(), String>>,
    C: Future<Output = Result<AuthCheck, String>>,
{
    let posted = post.await;
    let checked = check.await;
    (posted, checked)
}

/// Resolve the session on startup. Returns whether a session was found.
pub async fn initialize(auth: RwSignal<AuthState>) -> bool {
    let checked = api::check_session().await;
    let mut confirmed = false;
    auth.update(|state| confirmed = apply_check_outcome(state, checked));
    confirmed
}

/// Sign in with username and password.
///
/// # Errors
///
/// Returns the server's message when the POST is rejected, or
/// `Session not created` when the POST succeeded but no session appeared.
pub async fn login(auth: RwSignal<AuthState>, credentials: &Credentials) -> Result<(), String> {
    let (posted, checked) = login_sequence(api::login(credentials), api::check_session()).await;
    let mut confirmed = false;
    auth.update(|state| confirmed = apply_check_outcome(state, checked));
    login_outcome(posted, confirmed)
}

/// Create an account and sign in with the session the server opened.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn signup(auth: RwSignal<AuthState>, request: &SignupRequest) -> Result<(), String> {
    let (posted, checked) = login_sequence(api::signup(request), api::check_session()).await;
    let mut confirmed = false;
    auth.update(|state| confirmed = apply_check_outcome(state, checked));
    login_outcome(posted, confirmed)
}

/// Complete an OAuth sign-in with the provider's payload. Returns whether
/// a session was confirmed; exchange errors are logged, not surfaced.
pub async fn oauth_login(auth: RwSignal<AuthState>, provider: OauthProvider, payload: &str) -> bool {
    let (exchanged, checked) =
        login_sequence(api::oauth_exchange(provider, payload), api::check_session()).await;
    if let Err(err) = exchanged {
        leptos::logging::warn!("oauth exchange failed: {err}");
    }
    let mut confirmed = false;
    auth.update(|state| confirmed = apply_check_outcome(state, checked));
    confirmed
}

/// Sign out. Local state is cleared even when the server request fails.
pub async fn logout(auth: RwSignal<AuthState>) {
    if let Err(err) = api::logout().await {
        leptos::logging::warn!("logout request failed: {err}");
    }
    auth.update(clear_session);
}
