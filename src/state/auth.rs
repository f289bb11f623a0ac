//! Authentication state machine, shared by the User and Admin controllers.
//!
//! ARCHITECTURE
//! ============
//! The state is a tagged phase plus two orthogonal annotations (`pending`
//! for an in-flight login/register, `error` for the last surfaced failure).
//! All mutation flows through the pure [`reduce`] function, so every legal
//! transition is enumerable and testable without any I/O.
//!
//! A controller starts in `Unknown` and must settle to `Anonymous` or
//! `Authenticated` before any route decision is made; `is_loading()` covers
//! both the initial revalidation and in-flight attempts.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use crate::net::types::Principal;

/// Where the session currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// Mount-time revalidation has not settled yet.
    #[default]
    Unknown,
    /// No live session for this variant.
    Anonymous,
    /// A live session with the given principal.
    Authenticated(Principal),
}

/// Observable authentication state for one variant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub phase: AuthPhase,
    /// A login or register call is in flight.
    pub pending: bool,
    /// Last operation error, shown inline by forms until cleared.
    pub error: Option<String>,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, AuthPhase::Authenticated(_))
    }

    /// True until the initial revalidation settles, and during attempts.
    /// Route guards must not render protected content or redirect while
    /// this holds.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending || matches!(self.phase, AuthPhase::Unknown)
    }

    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        match &self.phase {
            AuthPhase::Authenticated(p) => Some(p),
            _ => None,
        }
    }
}

/// Events produced by controller operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// A login or register call started.
    AttemptStarted,
    /// Login succeeded, or register succeeded on a variant that
    /// auto-authenticates.
    AttemptSucceeded(Principal),
    /// Register succeeded without establishing a session (Admin variant).
    AttemptSettled,
    /// Login/register/change-password failed with a display message.
    AttemptFailed(String),
    /// Mount-time revalidation confirmed the session.
    Revalidated(Principal),
    /// Revalidation failed or found nothing persisted; silent downgrade.
    Deauthorized,
    /// Explicit logout.
    LoggedOut,
    ErrorCleared,
}

/// Pure transition function.
///
/// A failed attempt keeps the current phase: a principal that was already
/// authenticated stays authenticated and the failure is only recorded in
/// `error`.
#[must_use]
pub fn reduce(state: &AuthState, event: AuthEvent) -> AuthState {
    match event {
        AuthEvent::AttemptStarted => AuthState {
            phase: state.phase.clone(),
            pending: true,
            error: None,
        },
        AuthEvent::AttemptSucceeded(principal) | AuthEvent::Revalidated(principal) => AuthState {
            phase: AuthPhase::Authenticated(principal),
            pending: false,
            error: None,
        },
        AuthEvent::AttemptSettled => AuthState {
            phase: state.phase.clone(),
            pending: false,
            error: None,
        },
        AuthEvent::AttemptFailed(message) => AuthState {
            phase: state.phase.clone(),
            pending: false,
            error: Some(message),
        },
        AuthEvent::Deauthorized => AuthState {
            phase: AuthPhase::Anonymous,
            pending: false,
            // Silent downgrade: the user sees "logged out", not an error.
            error: None,
        },
        AuthEvent::LoggedOut => AuthState {
            phase: AuthPhase::Anonymous,
            pending: false,
            error: None,
        },
        AuthEvent::ErrorCleared => AuthState {
            phase: state.phase.clone(),
            pending: state.pending,
            error: None,
        },
    }
}
