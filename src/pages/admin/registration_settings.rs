//! Admin control for the registration feature flag.

use leptos::prelude::*;

use crate::app::AdminAuth;
use crate::auth::Variant;
use crate::components::admin_shell::AdminShell;
use crate::guard::RequireAuth;
use crate::net::api;

#[component]
pub fn RegistrationSettingsPage() -> impl IntoView {
    let auth = expect_context::<AdminAuth>().0;

    view! {
        <RequireAuth auth=auth login_path=Variant::Admin.login_route()>
            <AdminShell title="Registration">
                <RegistrationToggle/>
            </AdminShell>
        </RequireAuth>
    }
}

#[component]
fn RegistrationToggle() -> impl IntoView {
    let status = LocalResource::new(|| api::fetch_registration_status());
    let error = RwSignal::new(Option::<String>::None);

    let on_toggle = move |enabled: bool| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update_registration_status(!enabled).await {
                Ok(_) => {
                    error.set(None);
                    status.refetch();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = enabled;
        }
    };

    view! {
        <div class="admin-settings">
            <p>
                "When enabled, the admin login page offers a sign-up link and "
                "the admin registration form accepts new accounts."
            </p>

            {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}

            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    status.get().map(|result| match result {
                        Ok(enabled) => view! {
                            <div class="admin-settings__row">
                                <span>
                                    "Admin registration is "
                                    <strong>{if enabled { "enabled" } else { "disabled" }}</strong>
                                </span>
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| on_toggle(enabled)
                                >
                                    {if enabled { "Disable" } else { "Enable" }}
                                </button>
                            </div>
                        }
                        .into_any(),
                        Err(err) => {
                            view! { <p class="error">{err.to_string()}</p> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
