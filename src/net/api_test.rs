use super::*;

// ============================================================================
// Endpoint Routing
// ============================================================================

#[test]
fn oauth_google_posts_to_google_endpoint() {
    let endpoint = oauth_exchange_endpoint(OauthProvider::Google);
    assert!(endpoint.ends_with("/api/auth/oauth/google"));
}

#[test]
fn oauth_github_exchanges_through_callback_endpoint() {
    let endpoint = oauth_exchange_endpoint(OauthProvider::Github);
    assert!(endpoint.ends_with("/api/auth/oauth/github/callback"));
}

// ============================================================================
// Error Messages
// ============================================================================

#[test]
fn telemetry_failure_matches_dashboard_wording() {
    assert_eq!(telemetry_failed_message(502), "Server error: 502");
}

#[test]
fn generic_failure_carries_status() {
    assert_eq!(request_failed_message(400), "request failed: 400");
    assert_eq!(check_failed_message(500), "auth check failed: 500");
    assert_eq!(analysis_failed_message(413), "analysis failed: 413");
}
