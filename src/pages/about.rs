//! About page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::public_header::PublicHeader;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page page--about">
            <PublicHeader/>
            <section class="about">
                <h1>"About Stratus"</h1>
                <p>
                    "We are a cloud consultancy helping organisations plan, build, "
                    "and operate on modern infrastructure. Our engineers have run "
                    "production platforms across every major cloud provider."
                </p>
                <p>
                    "From first migration to platform operations at scale, we work "
                    "alongside your team rather than around it."
                </p>
            </section>
            <Footer/>
        </div>
    }
}
