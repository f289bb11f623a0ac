//! Contact page with the consultation enquiry form.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::public_header::PublicHeader;
use crate::net::types::ConsultationInput;

fn validate(input: &ConsultationInput) -> Result<(), &'static str> {
    if input.name.trim().is_empty() {
        return Err("Name is required");
    }
    if input.email.trim().is_empty() || !input.email.contains('@') {
        return Err("A valid email is required");
    }
    if input.message.trim().is_empty() {
        return Err("Tell us a little about your project");
    }
    Ok(())
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let phone_value = phone.get();
        let input = ConsultationInput {
            name: name.get(),
            email: email.get(),
            phone: (!phone_value.trim().is_empty()).then_some(phone_value),
            message: message.get(),
        };
        if let Err(msg) = validate(&input) {
            error.set(Some(msg.to_owned()));
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_consultation(&input).await {
                Ok(()) => submitted.set(true),
                Err(err) => error.set(Some(err.to_string())),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
        }
    };

    view! {
        <div class="page page--contact">
            <PublicHeader/>
            <section class="contact">
                <h1>"Book a consultation"</h1>

                <Show
                    when=move || !submitted.get()
                    fallback=|| view! {
                        <p class="contact__thanks">
                            "Thanks! We received your enquiry and will be in touch shortly."
                        </p>
                    }
                >
                    <form class="contact__form" on:submit=on_submit>
                        {move || {
                            error.get().map(|msg| view! { <p class="error">{msg}</p> })
                        }}
                        <label>
                            "Name"
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Email"
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Phone (optional)"
                            <input
                                type="tel"
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "What do you need help with?"
                            <textarea
                                prop:value=move || message.get()
                                on:input=move |ev| message.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button type="submit" class="btn btn--primary">
                            "Send enquiry"
                        </button>
                    </form>
                </Show>
            </section>
            <Footer/>
        </div>
    }
}
