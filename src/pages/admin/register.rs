//! Admin registration page, gated by the remote registration flag.
//!
//! Unlike user registration, a successful admin registration does not sign
//! the new account in; the page confirms and points at the login form.

use leptos::prelude::*;

use crate::app::AdminAuth;
use crate::auth::Variant;
use crate::components::loading::LoadingScreen;
use crate::guard::GuestOnly;
use crate::net::api;
use crate::net::types::RegisterRequest;
use crate::state::registration::GateState;

#[component]
pub fn AdminRegisterPage() -> impl IntoView {
    let auth = expect_context::<AdminAuth>().0;

    view! {
        <GuestOnly auth=auth dashboard_path=Variant::Admin.dashboard_route()>
            <GatedRegister/>
        </GuestOnly>
    }
}

#[component]
fn GatedRegister() -> impl IntoView {
    let gate = LocalResource::new(|| async {
        GateState::from_fetch(api::fetch_registration_status().await)
    });

    view! {
        <Suspense fallback=move || view! { <LoadingScreen/> }>
            {move || {
                gate.get().map(|gate| match gate {
                    GateState::Checking => view! { <LoadingScreen/> }.into_any(),
                    GateState::Disabled => view! {
                        <div class="auth-page auth-page--admin">
                            <h1>"Admin registration"</h1>
                            <p>"Admin registration is currently disabled."</p>
                            <p class="auth-page__alt">
                                <a href="/admin/login">"Back to sign in"</a>
                            </p>
                        </div>
                    }
                    .into_any(),
                    GateState::Enabled => view! { <AdminRegisterForm/> }.into_any(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn AdminRegisterForm() -> impl IntoView {
    let auth = expect_context::<AdminAuth>().0;
    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::app::AdminSession>();

    let username = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let field_error = RwSignal::new(Option::<String>::None);
    let registered = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if username.get().trim().is_empty() {
            field_error.set(Some("Username is required".to_owned()));
            return;
        }
        if password.get().len() < 8 {
            field_error.set(Some("Password must be at least 8 characters long".to_owned()));
            return;
        }
        if password.get() != confirm.get() {
            field_error.set(Some("Passwords do not match".to_owned()));
            return;
        }
        field_error.set(None);

        let full_name_value = full_name.get();
        let req = RegisterRequest {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            full_name: (!full_name_value.trim().is_empty()).then_some(full_name_value),
        };

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if session.0.register(&req).await.is_ok() {
                    registered.set(true);
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
        }
    };

    view! {
        <div class="auth-page auth-page--admin">
            <h1>"Create an admin account"</h1>
            <Show
                when=move || !registered.get()
                fallback=|| view! {
                    <p class="auth-page__success">
                        "Registration successful. Please "
                        <a href="/admin/login">"log in"</a> " to continue."
                    </p>
                }
            >
                <form class="auth-page__form" on:submit=on_submit>
                    {move || {
                        field_error
                            .get()
                            .or_else(|| auth.get().error)
                            .map(|msg| view! { <p class="error">{msg}</p> })
                    }}
                    <label>
                        "Username"
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Full name"
                        <input
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
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
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Confirm password"
                        <input
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        type="submit"
                        class="btn btn--primary"
                        disabled=move || auth.get().pending
                    >
                        {move || if auth.get().pending { "Registering..." } else { "Register" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
