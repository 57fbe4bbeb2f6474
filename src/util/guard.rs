//! Route-guard predicates over the shared auth state.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::AuthState;

/// True when a protected page should bounce to the login view: the session
/// check has resolved and nobody is signed in. While `loading` the page
/// holds its ground instead of flashing a redirect.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.authenticated
}

/// True when the login or signup page should bounce to the dashboard.
pub fn should_redirect_authed(state: &AuthState) -> bool {
    state.authenticated
}
