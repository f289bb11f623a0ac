//! User login page. Redirects to the user dashboard when already signed in.

use leptos::prelude::*;

use crate::app::UserAuth;
use crate::auth::Variant;
use crate::guard::GuestOnly;
use crate::net::types::LoginRequest;

#[component]
pub fn UserLoginPage() -> impl IntoView {
    let auth = expect_context::<UserAuth>().0;

    view! {
        <GuestOnly auth=auth dashboard_path=Variant::User.dashboard_route()>
            <LoginForm/>
        </GuestOnly>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let auth = expect_context::<UserAuth>().0;
    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::app::UserSession>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let req = LoginRequest { email: email.get(), password: password.get() };

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                // Failure is reflected in the shared auth state; success
                // flips it and the guest guard redirects to the dashboard.
                let _ = session.0.login(&req).await;
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Sign in"</h1>
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
            <p class="auth-page__alt">
                "New here? " <a href="/user/register">"Create an account"</a>
            </p>
        </div>
    }
}
