//! Site-wide footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__links">
                <a href="/services">"Services"</a>
                <a href="/contact">"Contact"</a>
                <a href="/admin/login">"Admin"</a>
            </div>
            <p class="site-footer__copy">"Stratus Cloud Consulting"</p>
        </footer>
    }
}
