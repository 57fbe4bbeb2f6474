use super::*;

#[test]
fn api_url_joins_base_and_path() {
    assert_eq!(api_url("/api/auth/check"), format!("{API_BASE_URL}/api/auth/check"));
}

#[test]
fn github_authorize_url_embeds_origin_callback() {
    let url = github_authorize_url("https://agro.example");
    assert!(url.starts_with("https://github.com/login/oauth/authorize?client_id="));
    assert!(url.ends_with("&redirect_uri=https://agro.example/github/callback"));
}
