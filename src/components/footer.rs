//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">"Smart Agro"</div>
            <p class="footer__tagline">"Agro-solar monitoring for smarter farms."</p>
            <div class="footer__links">
                <a class="footer__link" href="/about">"About"</a>
                <a class="footer__link" href="/contact">"Contact"</a>
            </div>
            <p class="footer__copyright">"© 2026 Smart Agro. All rights reserved."</p>
        </footer>
    }
}
