//! Admin dashboard: headline counts for the managed collections.

use leptos::prelude::*;

use crate::app::AdminAuth;
use crate::auth::Variant;
use crate::components::admin_shell::AdminShell;
use crate::guard::RequireAuth;
use crate::net::api;
use crate::net::error::ApiError;

fn count<T>(result: Option<Result<Vec<T>, ApiError>>) -> String {
    match result {
        Some(Ok(list)) => list.len().to_string(),
        Some(Err(_)) => "—".to_owned(),
        None => "…".to_owned(),
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<AdminAuth>().0;

    view! {
        <RequireAuth auth=auth login_path=Variant::Admin.login_route()>
            <AdminShell title="Dashboard">
                <DashboardCards/>
            </AdminShell>
        </RequireAuth>
    }
}

#[component]
fn DashboardCards() -> impl IntoView {
    let auth = expect_context::<AdminAuth>().0;

    let services = LocalResource::new(|| api::fetch_all_services());
    let categories = LocalResource::new(|| api::fetch_all_categories());
    let enquiries = LocalResource::new(|| api::fetch_consultations());

    view! {
        <div class="admin-dashboard">
            {move || {
                auth.get().principal().map(|principal| {
                    let name = principal
                        .full_name
                        .clone()
                        .unwrap_or_else(|| principal.username.clone());
                    view! { <p class="admin-dashboard__greeting">"Welcome back, " {name}</p> }
                })
            }}
            <div class="admin-dashboard__cards">
                <a class="stat-card" href="/admin/services">
                    <span class="stat-card__value">{move || count(services.get())}</span>
                    <span class="stat-card__label">"Services"</span>
                </a>
                <a class="stat-card" href="/admin/categories">
                    <span class="stat-card__value">{move || count(categories.get())}</span>
                    <span class="stat-card__label">"Categories"</span>
                </a>
                <a class="stat-card" href="/admin/enquiries">
                    <span class="stat-card__value">{move || count(enquiries.get())}</span>
                    <span class="stat-card__label">"Enquiries"</span>
                </a>
            </div>
        </div>
    }
}
