//! Careers page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::public_header::PublicHeader;

#[component]
pub fn CareerPage() -> impl IntoView {
    view! {
        <div class="page page--career">
            <PublicHeader/>
            <section class="career">
                <h1>"Careers"</h1>
                <p>
                    "We hire engineers who like explaining things as much as "
                    "building them. Remote-first, client-facing, hands-on."
                </p>
                <p>
                    "No open roles right now? Write to us anyway through the "
                    <a href="/contact">"contact page"</a> "."
                </p>
            </section>
            <Footer/>
        </div>
    }
}
