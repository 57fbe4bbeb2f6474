//! GitHub OAuth landing route.
//!
//! GitHub redirects here with a `code` query parameter. The code is
//! exchanged exactly once, in a single attempt, and never logged.

#[cfg(test)]
#[path = "github_callback_test.rs"]
mod github_callback_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Pull a usable authorization code out of the query value.
fn extract_code(raw: Option<String>) -> Option<String> {
    let code = raw?.trim().to_owned();
    if code.is_empty() { None } else { Some(code) }
}

#[component]
pub fn GithubCallbackPage() -> impl IntoView {
    let query = use_query_map();
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
        let navigate = use_navigate();
        let code = extract_code(query.read_untracked().get("code"));
        leptos::task::spawn_local(async move {
            let confirmed = match code {
                Some(code) => {
                    crate::session::oauth_login(auth, crate::net::api::OauthProvider::Github, &code)
                        .await
                }
                None => false,
            };
            if confirmed {
                navigate("/dashboard", NavigateOptions::default());
            } else {
                error.set(Some("GitHub login failed".to_owned()));
                navigate("/login", NavigateOptions::default());
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &query;
    }

    view! {
        <div class="github-callback-page">
            <p>"Signing you in with GitHub..."</p>
            <Show when=move || error.get().is_some()>
                <p class="form__status form__status--error">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
