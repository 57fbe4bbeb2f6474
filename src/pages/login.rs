//! Login page: credential form, Google widget bridge, GitHub redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three ways in, one rule out: however the session gets created, only a
//! confirmed `/api/auth/check` flips local auth state. The Google Identity
//! widget calls a global function by name, so one is registered while this
//! page is mounted and removed on teardown. The GitHub button leaves the
//! app entirely and comes back through `/github/callback`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Script;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::auth::AuthState;
use crate::util::dialog;
use crate::util::guard::should_redirect_authed;

/// Trim the username and refuse empty fields. Passwords go through as
/// typed.
fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

/// Wording for the blocking alert on a failed login.
fn login_alert_message(err: &str) -> String {
    if err.is_empty() {
        "Invalid login credentials".to_owned()
    } else {
        err.to_owned()
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let oauth_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Already signed in, straight to the dashboard.
    let navigate = use_navigate();
    Effect::new(move || {
        if should_redirect_authed(&auth.get()) {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    // Bridge for the Google Identity widget.
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsValue;
        use wasm_bindgen::prelude::Closure;

        let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
            let credential = js_sys::Reflect::get(&response, &"credential".into())
                .ok()
                .and_then(|value| value.as_string());
            match credential {
                Some(credential) => {
                    leptos::task::spawn_local(async move {
                        let confirmed = crate::session::oauth_login(
                            auth,
                            crate::net::api::OauthProvider::Google,
                            &credential,
                        )
                        .await;
                        if !confirmed {
                            oauth_error.set(Some("Google login failed".to_owned()));
                        }
                    });
                }
                None => oauth_error.set(Some("Google login failed".to_owned())),
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = js_sys::Reflect::set(&window, &"onGoogleCredential".into(), callback.as_ref());
        }
        on_cleanup(move || {
            if let Some(window) = web_sys::window() {
                let _ = js_sys::Reflect::set(&window, &"onGoogleCredential".into(), &JsValue::UNDEFINED);
            }
            drop(callback);
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&username.get(), &password.get()) {
            Err(err) => dialog::alert(&login_alert_message(err)),
            Ok(credentials) => {
                #[cfg(feature = "hydrate")]
                {
                    submitting.set(true);
                    leptos::task::spawn_local(async move {
                        if let Err(err) = crate::session::login(auth, &credentials).await {
                            dialog::alert(&login_alert_message(&err));
                        }
                        submitting.set(false);
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = credentials;
                }
            }
        }
    };

    let on_github = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window()
                && let Ok(origin) = window.location().origin()
            {
                let _ = window
                    .location()
                    .set_href(&crate::config::github_authorize_url(&origin));
            }
        }
    };

    view! {
        <div class="login-page">
            <h1>"Smart Agro Login"</h1>
            <Show when=move || oauth_error.get().is_some()>
                <p class="form__status form__status--error">
                    {move || oauth_error.get().unwrap_or_default()}
                </p>
            </Show>

            <Script src="https://accounts.google.com/gsi/client" async_="true" />
            <div
                id="g_id_onload"
                data-client_id=crate::config::GOOGLE_CLIENT_ID
                data-callback="onGoogleCredential"
            ></div>
            <div class="g_id_signin" data-type="standard"></div>

            <button class="btn login-page__github" on:click=on_github>
                "Continue with GitHub"
            </button>

            <div class="login-page__divider">"or"</div>

            <form class="form login-page__form" on:submit=on_submit>
                <label class="form__label">
                    "Username"
                    <input
                        class="form__input"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Password"
                    <input
                        class="form__input"
                        type=move || if show_password.get() { "text" } else { "password" }
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn login-page__toggle"
                    type="button"
                    on:click=move |_| show_password.update(|shown| *shown = !*shown)
                >
                    {move || if show_password.get() { "Hide" } else { "Show" }}
                </button>
                <button class="btn form__submit" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>

            <p class="login-page__switch">
                "Don't have an account? "
                <a href="/signup">"Sign Up"</a>
            </p>
        </div>
    }
}
