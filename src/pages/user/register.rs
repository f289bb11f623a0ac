//! User registration page. Always available; a successful registration
//! signs the user in immediately and the guest guard redirects.

use leptos::prelude::*;

use crate::app::UserAuth;
use crate::auth::Variant;
use crate::guard::GuestOnly;
use crate::net::types::RegisterRequest;

#[component]
pub fn UserRegisterPage() -> impl IntoView {
    let auth = expect_context::<UserAuth>().0;

    view! {
        <GuestOnly auth=auth dashboard_path=Variant::User.dashboard_route()>
            <RegisterForm/>
        </GuestOnly>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let auth = expect_context::<UserAuth>().0;
    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::app::UserSession>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let field_error = RwSignal::new(Option::<String>::None);

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

        let req = RegisterRequest {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            full_name: None,
        };

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let _ = session.0.register(&req).await;
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Create an account"</h1>
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
                <button type="submit" class="btn btn--primary" disabled=move || auth.get().pending>
                    {move || if auth.get().pending { "Creating account..." } else { "Register" }}
                </button>
            </form>
            <p class="auth-page__alt">
                "Already registered? " <a href="/user/login">"Sign in"</a>
            </p>
        </div>
    }
}
