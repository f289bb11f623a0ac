//! User dashboard, behind the User variant's route guard.

use leptos::prelude::*;

use crate::app::UserAuth;
use crate::auth::Variant;
use crate::guard::RequireAuth;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let auth = expect_context::<UserAuth>().0;

    view! {
        <RequireAuth auth=auth login_path=Variant::User.login_route()>
            <DashboardContent/>
        </RequireAuth>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = expect_context::<UserAuth>().0;
    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::app::UserSession>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                session.0.logout().await;
            });
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Your account"</h1>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            {move || {
                auth.get().principal().map(|principal| {
                    view! {
                        <div class="profile-card">
                            <h2>{principal.username.clone()}</h2>
                            <p>{principal.email.clone()}</p>
                        </div>
                    }
                })
            }}
            <section class="dashboard-page__cta">
                <p>"Need help with a new project?"</p>
                <a href="/contact" class="btn btn--primary">"Book a consultation"</a>
            </section>
        </div>
    }
}
