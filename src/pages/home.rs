//! Home page: hero plus a teaser of the active services.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::public_header::PublicHeader;
use crate::net::api;

#[component]
pub fn HomePage() -> impl IntoView {
    let services = LocalResource::new(|| async {
        api::fetch_active_services().await.unwrap_or_default()
    });

    view! {
        <div class="page page--home">
            <PublicHeader/>

            <section class="hero">
                <h1>"Cloud strategy, delivered."</h1>
                <p>
                    "Stratus helps teams design, migrate, and run cloud platforms "
                    "with confidence."
                </p>
                <div class="hero__actions">
                    <a href="/contact" class="btn btn--primary">"Book a consultation"</a>
                    <a href="/services" class="btn">"Explore services"</a>
                </div>
            </section>

            <section class="home-services">
                <h2>"What we do"</h2>
                <Suspense fallback=move || view! { <p>"Loading services..."</p> }>
                    {move || {
                        services.get().map(|list| {
                            list.into_iter()
                                .take(3)
                                .map(|service| {
                                    view! {
                                        <a class="service-card" href=format!("/services/{}", service.id)>
                                            <h3>{service.title}</h3>
                                            <p>{service.description}</p>
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                    }}
                </Suspense>
            </section>

            <Footer/>
        </div>
    }
}
