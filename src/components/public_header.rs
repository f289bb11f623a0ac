//! Site-wide header for the public pages.

use leptos::prelude::*;

use crate::app::UserAuth;

/// Top navigation. The right-hand slot follows the User variant's auth
/// state: dashboard link when signed in, sign-in link otherwise.
#[component]
pub fn PublicHeader() -> impl IntoView {
    let auth = expect_context::<UserAuth>().0;

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"Stratus"</a>
            <nav class="site-header__nav">
                <a href="/services">"Services"</a>
                <a href="/case-studies">"Case Studies"</a>
                <a href="/about">"About"</a>
                <a href="/career">"Careers"</a>
                <a href="/contact">"Contact"</a>
            </nav>
            <div class="site-header__auth">
                {move || {
                    if auth.get().is_authenticated() {
                        view! { <a href="/user/dashboard" class="btn btn--primary">"Dashboard"</a> }
                            .into_any()
                    } else {
                        view! { <a href="/user/login" class="btn">"Sign in"</a> }.into_any()
                    }
                }}
            </div>
        </header>
    }
}
