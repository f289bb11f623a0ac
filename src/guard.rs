//! Route guards for the protected and guest-only subtrees.
//!
//! ARCHITECTURE
//! ============
//! The render/redirect decision is a pure function of one variant's
//! [`AuthState`]; the Leptos components below are thin shells around it.
//! Guards are instantiated per variant and never consult the other
//! variant's state, so an admin session cannot unlock user routes and vice
//! versa.
//!
//! While the state is loading (initial revalidation or an in-flight
//! attempt), protected routes render a neutral loading screen — neither
//! the protected content nor a redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::loading::LoadingScreen;
use crate::state::auth::AuthState;

/// Decision for a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Loading,
    Allow,
    RedirectToLogin,
}

#[must_use]
pub fn guard_protected(state: &AuthState) -> RouteDecision {
    if state.is_loading() {
        RouteDecision::Loading
    } else if state.is_authenticated() {
        RouteDecision::Allow
    } else {
        RouteDecision::RedirectToLogin
    }
}

/// Decision for a login/register route: an already-authenticated principal
/// is sent to its dashboard instead of being shown the form again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuestDecision {
    Allow,
    RedirectToDashboard,
}

#[must_use]
pub fn guard_guest(state: &AuthState) -> GuestDecision {
    if state.is_authenticated() {
        GuestDecision::RedirectToDashboard
    } else {
        GuestDecision::Allow
    }
}

/// Wrapper for a protected subtree; renders `children` only once the given
/// variant's state settles authenticated.
#[component]
pub fn RequireAuth(
    auth: RwSignal<AuthState>,
    #[prop(into)] login_path: String,
    children: ChildrenFn,
) -> impl IntoView {
    move || match guard_protected(&auth.get()) {
        RouteDecision::Loading => view! { <LoadingScreen/> }.into_any(),
        RouteDecision::Allow => children().into_any(),
        RouteDecision::RedirectToLogin => {
            view! { <Redirect path=login_path.clone()/> }.into_any()
        }
    }
}

/// Wrapper for login/register routes.
#[component]
pub fn GuestOnly(
    auth: RwSignal<AuthState>,
    #[prop(into)] dashboard_path: String,
    children: ChildrenFn,
) -> impl IntoView {
    move || match guard_guest(&auth.get()) {
        GuestDecision::Allow => children().into_any(),
        GuestDecision::RedirectToDashboard => {
            view! { <Redirect path=dashboard_path.clone()/> }.into_any()
        }
    }
}
