//! Public services listing. Shows only active services, in display order.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::public_header::PublicHeader;
use crate::net::api;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let services = LocalResource::new(|| api::fetch_active_services());

    view! {
        <div class="page page--services">
            <PublicHeader/>
            <section class="services">
                <h1>"Services"</h1>
                <Suspense fallback=move || view! { <p>"Loading services..."</p> }>
                    {move || {
                        services.get().map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"No services are available right now."</p> }.into_any()
                            }
                            Ok(list) => view! {
                                <div class="services__grid">
                                    {list
                                        .into_iter()
                                        .map(|service| {
                                            let price = service
                                                .price
                                                .map(|p| format!("from ${p:.0}"))
                                                .unwrap_or_default();
                                            view! {
                                                <a class="service-card" href=format!("/services/{}", service.id)>
                                                    <h3>{service.title}</h3>
                                                    <p>{service.description}</p>
                                                    <span class="service-card__price">{price}</span>
                                                </a>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any(),
                            Err(_) => {
                                view! { <p class="error">"Could not load services. Please try again later."</p> }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>
            <Footer/>
        </div>
    }
}
