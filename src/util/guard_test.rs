use super::*;

fn resolved_anonymous() -> AuthState {
    AuthState {
        loading: false,
        ..AuthState::default()
    }
}

fn signed_in() -> AuthState {
    AuthState {
        authenticated: true,
        loading: false,
        ..AuthState::default()
    }
}

#[test]
fn loading_state_holds_both_redirects() {
    let state = AuthState::default();
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
}

#[test]
fn resolved_anonymous_state_redirects_protected_pages() {
    assert!(should_redirect_unauth(&resolved_anonymous()));
    assert!(!should_redirect_authed(&resolved_anonymous()));
}

#[test]
fn signed_in_state_redirects_login_pages() {
    assert!(!should_redirect_unauth(&signed_in()));
    assert!(should_redirect_authed(&signed_in()));
}

#[test]
fn authed_redirect_does_not_wait_for_loading() {
    let state = AuthState {
        authenticated: true,
        ..AuthState::default()
    };
    assert!(should_redirect_authed(&state));
}
