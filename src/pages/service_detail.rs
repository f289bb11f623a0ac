//! Public detail page for a single service.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::footer::Footer;
use crate::components::public_header::PublicHeader;
use crate::net::api;

#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let service = LocalResource::new(move || {
        let id = params.get().get("id").unwrap_or_default();
        async move { api::fetch_service(&id).await }
    });

    view! {
        <div class="page page--service-detail">
            <PublicHeader/>
            <section class="service-detail">
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        service.get().map(|result| match result {
                            Ok(service) => {
                                let price = service
                                    .price
                                    .map(|p| format!("from ${p:.0}"))
                                    .unwrap_or_default();
                                view! {
                                    <article>
                                        <h1>{service.title}</h1>
                                        <p class="service-detail__price">{price}</p>
                                        <p>{service.description}</p>
                                        <a href="/contact" class="btn btn--primary">
                                            "Talk to us about this service"
                                        </a>
                                    </article>
                                }
                                .into_any()
                            }
                            Err(_) => {
                                view! { <p class="error">"Service not found."</p> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>
            <Footer/>
        </div>
    }
}
