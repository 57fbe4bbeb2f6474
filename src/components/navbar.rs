//! Top navigation bar with brand, section links, and the session area.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Site-wide navigation. The Dashboard link appears only when signed in;
/// the session area flips between the user's display name with a logout
/// button and a login link.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let display_name = move || {
        auth.get()
            .user
            .map(|user| user.display_name())
            .unwrap_or_else(|| "Account".to_owned())
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::session::logout(auth).await;
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Smart Agro"</a>
            <div class="navbar__links">
                <a class="navbar__link" href="/">"Home"</a>
                <a class="navbar__link" href="/about">"About"</a>
                <a class="navbar__link" href="/contact">"Contact"</a>
                <Show when=move || auth.get().authenticated>
                    <a class="navbar__link" href="/dashboard">"Dashboard"</a>
                </Show>
            </div>
            <span class="navbar__spacer"></span>
            <Show
                when=move || auth.get().authenticated
                fallback=|| {
                    view! {
                        <a class="navbar__link navbar__login" href="/login">"Login"</a>
                    }
                }
            >
                <span class="navbar__user">{display_name}</span>
                <button class="btn navbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
