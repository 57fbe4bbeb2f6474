//! Account creation page.
//!
//! The server opens a session on signup, so the submit path applies the
//! same confirmation rule as login and the page redirects to the
//! dashboard once the auth state flips.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::SignupRequest;
use crate::state::auth::AuthState;
use crate::util::guard::should_redirect_authed;

/// Trim every field and refuse the form when any is empty. The password
/// is checked as typed, never trimmed.
fn validate_signup_input(draft: &SignupRequest) -> Result<SignupRequest, &'static str> {
    let trimmed = SignupRequest {
        full_name: draft.full_name.trim().to_owned(),
        username: draft.username.trim().to_owned(),
        phone: draft.phone.trim().to_owned(),
        email: draft.email.trim().to_owned(),
        password: draft.password.clone(),
        state: draft.state.trim().to_owned(),
        district: draft.district.trim().to_owned(),
        village: draft.village.trim().to_owned(),
    };
    let required = [
        &trimmed.full_name,
        &trimmed.username,
        &trimmed.phone,
        &trimmed.email,
        &trimmed.password,
        &trimmed.state,
        &trimmed.district,
        &trimmed.village,
    ];
    if required.iter().any(|field| field.is_empty()) {
        return Err("All fields are required.");
    }
    Ok(trimmed)
}

/// Labelled text input bound to a signal.
#[component]
fn Field(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            <input
                class="form__input"
                type=input_type.unwrap_or("text")
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let full_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let district = RwSignal::new(String::new());
    let village = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Already signed in, straight to the dashboard.
    let navigate = use_navigate();
    Effect::new(move || {
        if should_redirect_authed(&auth.get()) {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = SignupRequest {
            full_name: full_name.get(),
            username: username.get(),
            phone: phone.get(),
            email: email.get(),
            password: password.get(),
            state: state.get(),
            district: district.get(),
            village: village.get(),
        };
        match validate_signup_input(&draft) {
            Err(err) => error.set(Some(err.to_owned())),
            Ok(request) => {
                #[cfg(feature = "hydrate")]
                {
                    submitting.set(true);
                    leptos::task::spawn_local(async move {
                        match crate::session::signup(auth, &request).await {
                            Ok(()) => error.set(None),
                            Err(err) => error.set(Some(err)),
                        }
                        submitting.set(false);
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = request;
                }
            }
        }
    };

    view! {
        <div class="signup-page">
            <h1>"Create your Smart Agro account"</h1>
            <Show when=move || error.get().is_some()>
                <p class="form__status form__status--error">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
            <form class="form signup-page__form" on:submit=on_submit>
                <Field label="Full Name" value=full_name />
                <Field label="Username" value=username />
                <Field label="Phone" value=phone input_type="tel" />
                <Field label="Email" value=email input_type="email" />
                <Field label="Password" value=password input_type="password" />
                <Field label="State" value=state />
                <Field label="District" value=district />
                <Field label="Village" value=village />
                <button class="btn form__submit" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                </button>
            </form>
            <p class="signup-page__switch">
                "Already have an account? "
                <a href="/login">"Login"</a>
            </p>
        </div>
    }
}
