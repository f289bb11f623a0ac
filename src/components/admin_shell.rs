//! Layout shell for the admin back-office.

use leptos::prelude::*;

/// Admin chrome: header with a logout action, side navigation, content
/// area. Rendered only inside the admin `RequireAuth` subtree.
#[component]
pub fn AdminShell(#[prop(into)] title: String, children: Children) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::app::AdminSession>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                // Best-effort: local state clears even if the call fails,
                // and the route guard redirects to the login page.
                session.0.logout().await;
            });
        }
    };

    view! {
        <div class="admin-shell">
            <header class="admin-shell__header">
                <span class="admin-shell__brand">"Stratus Admin"</span>
                <span class="admin-shell__title">{title}</span>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <div class="admin-shell__body">
                <nav class="admin-shell__nav">
                    <a href="/admin/dashboard">"Dashboard"</a>
                    <a href="/admin/services">"Services"</a>
                    <a href="/admin/categories">"Categories"</a>
                    <a href="/admin/enquiries">"Enquiries"</a>
                    <a href="/admin/registration-settings">"Registration"</a>
                    <a href="/admin/change-password">"Change Password"</a>
                </nav>
                <main class="admin-shell__content">{children()}</main>
            </div>
        </div>
    }
}
