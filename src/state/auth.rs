//! Session state shared across the whole app.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;

/// Who is signed in, as far as the client knows.
///
/// `loading` starts `true` so guarded pages hold their redirect until the
/// initial session check has settled one way or the other.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    /// Profile returned by the session check, when signed in.
    pub user: Option<UserProfile>,
    /// Whether the server confirmed a live session.
    pub authenticated: bool,
    /// True until the first session check completes.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            authenticated: false,
            loading: true,
        }
    }
}
