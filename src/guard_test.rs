use super::*;
use crate::net::types::Principal;
use crate::state::auth::AuthPhase;

fn authenticated() -> AuthState {
    AuthState {
        phase: AuthPhase::Authenticated(Principal {
            id: "u1".to_owned(),
            username: "bob".to_owned(),
            email: "b@x.com".to_owned(),
            full_name: None,
        }),
        pending: false,
        error: None,
    }
}

fn anonymous() -> AuthState {
    AuthState { phase: AuthPhase::Anonymous, pending: false, error: None }
}

// =============================================================
// Protected routes
// =============================================================

#[test]
fn unknown_phase_renders_loading_not_redirect() {
    assert_eq!(guard_protected(&AuthState::default()), RouteDecision::Loading);
}

#[test]
fn pending_attempt_renders_loading() {
    let state = AuthState { pending: true, ..anonymous() };
    assert_eq!(guard_protected(&state), RouteDecision::Loading);
}

#[test]
fn settled_authenticated_renders_content() {
    assert_eq!(guard_protected(&authenticated()), RouteDecision::Allow);
}

#[test]
fn settled_anonymous_redirects_to_login() {
    assert_eq!(guard_protected(&anonymous()), RouteDecision::RedirectToLogin);
}

#[test]
fn error_does_not_unlock_protected_content() {
    let state = AuthState { error: Some("bad credentials".to_owned()), ..anonymous() };
    assert_eq!(guard_protected(&state), RouteDecision::RedirectToLogin);
}

// =============================================================
// Guest-only routes
// =============================================================

#[test]
fn guest_route_renders_form_for_anonymous() {
    assert_eq!(guard_guest(&anonymous()), GuestDecision::Allow);
}

#[test]
fn guest_route_redirects_authenticated_principal() {
    assert_eq!(guard_guest(&authenticated()), GuestDecision::RedirectToDashboard);
}

#[test]
fn guest_route_shows_form_while_revalidation_pending() {
    // Matches the original login-route wrappers: only a settled
    // authenticated session redirects away.
    assert_eq!(guard_guest(&AuthState::default()), GuestDecision::Allow);
}
