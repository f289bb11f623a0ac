//! Admin login page.
//!
//! The sign-up link is shown only when the remote registration flag reads
//! enabled; a failed read hides it (fail closed). The form itself is never
//! gated, only the affordance.

use leptos::prelude::*;

use crate::app::AdminAuth;
use crate::auth::Variant;
use crate::guard::GuestOnly;
use crate::net::api;
use crate::net::types::LoginRequest;
use crate::state::registration::GateState;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = expect_context::<AdminAuth>().0;

    view! {
        <GuestOnly auth=auth dashboard_path=Variant::Admin.dashboard_route()>
            <AdminLoginForm/>
        </GuestOnly>
    }
}

#[component]
fn AdminLoginForm() -> impl IntoView {
    let auth = expect_context::<AdminAuth>().0;
    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::app::AdminSession>();

    let gate = LocalResource::new(|| async {
        GateState::from_fetch(api::fetch_registration_status().await)
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let req = LoginRequest { email: email.get(), password: password.get() };

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let _ = session.0.login(&req).await;
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
        }
    };

    view! {
        <div class="auth-page auth-page--admin">
            <h1>"Admin sign in"</h1>
            <form class="auth-page__form" on:submit=on_submit>
                {move || auth.get().error.map(|msg| view! { <p class="error">{msg}</p> })}
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn--primary" disabled=move || auth.get().pending>
                    {move || if auth.get().pending { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <Suspense fallback=|| ()>
                {move || {
                    gate.get().map(|gate| {
                        gate.is_enabled().then(|| {
                            view! {
                                <p class="auth-page__alt">
                                    "Need an admin account? "
                                    <a href="/admin/register">"Sign up"</a>
                                </p>
                            }
                        })
                    })
                }}
            </Suspense>
        </div>
    }
}
