//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar};
use crate::pages::{
    about::AboutPage, contact::ContactPage, dashboard::DashboardPage,
    github_callback::GithubCallbackPage, home::HomePage, insights::InsightsPage, login::LoginPage,
    signup::SignupPage,
};
use crate::state::auth::AuthState;
use crate::state::telemetry::TelemetryCache;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and telemetry contexts and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let cache = TelemetryCache::default();

    provide_context(auth);
    provide_context(cache);

    // Restore any cookie session before the route guards settle.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            crate::session::initialize(auth).await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/smartagro.css"/>
        <Title text="Smart Agro"/>

        <Router>
            <Navbar/>
            <main class="app__content">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=(StaticSegment("insights"), ParamSegment("kind")) view=InsightsPage/>
                    <Route path=(StaticSegment("github"), StaticSegment("callback")) view=GithubCallbackPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
