//! Admin change-password form.
//!
//! Client-side validation runs before any request; the server is only
//! consulted once the input passes.

use leptos::prelude::*;

use crate::app::AdminAuth;
use crate::auth::Variant;
use crate::components::admin_shell::AdminShell;
use crate::guard::RequireAuth;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let auth = expect_context::<AdminAuth>().0;

    view! {
        <RequireAuth auth=auth login_path=Variant::Admin.login_route()>
            <AdminShell title="Change Password">
                <ChangePasswordForm/>
            </AdminShell>
        </RequireAuth>
    }
}

#[component]
fn ChangePasswordForm() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::app::AdminSession>();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let changed = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        changed.set(false);

        let input = crate::auth::ChangePasswordInput {
            old_password: old_password.get(),
            new_password: new_password.get(),
            confirm_password: confirm_password.get(),
        };

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match session.0.change_password(&input).await {
                    Ok(()) => {
                        error.set(None);
                        changed.set(true);
                        old_password.set(String::new());
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
        }
    };

    view! {
        <div class="admin-settings">
            <form class="admin-manager__form" on:submit=on_submit>
                {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}
                {move || {
                    changed
                        .get()
                        .then(|| view! { <p class="success">"Password changed."</p> })
                }}
                <label>
                    "Current password"
                    <input
                        type="password"
                        prop:value=move || old_password.get()
                        on:input=move |ev| old_password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "New password"
                    <input
                        type="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Confirm new password"
                    <input
                        type="password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn--primary">
                    "Change password"
                </button>
            </form>
        </div>
    }
}
