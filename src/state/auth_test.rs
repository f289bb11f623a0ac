use super::*;

fn principal(id: &str) -> Principal {
    Principal {
        id: id.to_owned(),
        username: "bob".to_owned(),
        email: "b@x.com".to_owned(),
        full_name: None,
    }
}

fn authenticated(id: &str) -> AuthState {
    AuthState {
        phase: AuthPhase::Authenticated(principal(id)),
        pending: false,
        error: None,
    }
}

// =============================================================
// Initial state and loading
// =============================================================

#[test]
fn initial_state_is_unknown_and_loading() {
    let state = AuthState::default();
    assert_eq!(state.phase, AuthPhase::Unknown);
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
}

#[test]
fn pending_attempt_counts_as_loading() {
    let state = reduce(
        &AuthState { phase: AuthPhase::Anonymous, ..AuthState::default() },
        AuthEvent::AttemptStarted,
    );
    assert!(state.pending);
    assert!(state.is_loading());
    assert_eq!(state.phase, AuthPhase::Anonymous);
}

#[test]
fn settled_anonymous_is_not_loading() {
    let state = reduce(&AuthState::default(), AuthEvent::Deauthorized);
    assert!(!state.is_loading());
}

// =============================================================
// Attempts
// =============================================================

#[test]
fn attempt_started_clears_previous_error() {
    let errored = reduce(&AuthState::default(), AuthEvent::AttemptFailed("bad".to_owned()));
    let state = reduce(&errored, AuthEvent::AttemptStarted);
    assert_eq!(state.error, None);
}

#[test]
fn attempt_succeeded_authenticates() {
    let state = reduce(&AuthState::default(), AuthEvent::AttemptSucceeded(principal("u1")));
    assert!(state.is_authenticated());
    assert!(!state.is_loading());
    assert_eq!(state.principal().unwrap().id, "u1");
}

#[test]
fn failed_attempt_from_anonymous_stays_anonymous_with_error() {
    let anon = AuthState { phase: AuthPhase::Anonymous, ..AuthState::default() };
    let state = reduce(
        &reduce(&anon, AuthEvent::AttemptStarted),
        AuthEvent::AttemptFailed("wrong password".to_owned()),
    );
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert_eq!(state.error.as_deref(), Some("wrong password"));
    assert!(!state.pending);
}

#[test]
fn failed_attempt_keeps_existing_authentication() {
    let state = reduce(
        &reduce(&authenticated("u1"), AuthEvent::AttemptStarted),
        AuthEvent::AttemptFailed("nope".to_owned()),
    );
    assert!(state.is_authenticated());
    assert_eq!(state.principal().unwrap().id, "u1");
    assert_eq!(state.error.as_deref(), Some("nope"));
}

#[test]
fn attempt_settled_ends_pending_without_session() {
    let anon = AuthState { phase: AuthPhase::Anonymous, ..AuthState::default() };
    let state = reduce(&reduce(&anon, AuthEvent::AttemptStarted), AuthEvent::AttemptSettled);
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert!(!state.pending);
    assert_eq!(state.error, None);
}

// =============================================================
// Revalidation, logout, error clearing
// =============================================================

#[test]
fn revalidated_adopts_fresh_principal() {
    let state = reduce(&AuthState::default(), AuthEvent::Revalidated(principal("u2")));
    assert_eq!(state.principal().unwrap().id, "u2");
    assert!(!state.is_loading());
}

#[test]
fn deauthorized_is_silent() {
    let state = reduce(&authenticated("u1"), AuthEvent::Deauthorized);
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert_eq!(state.error, None);
}

#[test]
fn logout_always_lands_anonymous() {
    let state = reduce(&authenticated("u1"), AuthEvent::LoggedOut);
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert!(!state.is_authenticated());
}

#[test]
fn clear_error_keeps_phase_and_pending() {
    let errored = reduce(&authenticated("u1"), AuthEvent::AttemptFailed("x".to_owned()));
    let state = reduce(&errored, AuthEvent::ErrorCleared);
    assert_eq!(state.error, None);
    assert!(state.is_authenticated());
}
