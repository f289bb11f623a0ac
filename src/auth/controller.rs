//! Generic auth controller, instantiated once per variant.
//!
//! ARCHITECTURE
//! ============
//! The original site grew two near-identical auth controllers (user and
//! admin) that drifted apart; here a single `AuthController` is
//! parameterized by [`Variant`], which carries the storage keys, routes,
//! and register policy. All state changes go through the pure
//! [`reduce`] transition; this type only sequences I/O around it.
//!
//! ERROR HANDLING
//! ==============
//! Operations record failures in the shared state AND return them, so a
//! form can show an inline message while guards and headers react to the
//! same state. Logout is best-effort: the remote call may fail, local
//! session state is cleared regardless.

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;

use std::cell::RefCell;

use crate::auth::Variant;
use crate::net::error::ApiError;
use crate::net::types::{
    AuthPayload, ChangePasswordRequest, LoginRequest, Principal, RegisterRequest,
};
use crate::session::{self, SessionStore};
use crate::state::auth::{AuthEvent, AuthState, reduce};

/// Remote auth operations, abstracted for testing.
///
/// The production implementation talks to the backend over `gloo-net`
/// with the variant's bearer token attached; tests script responses.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, req: &LoginRequest) -> Result<AuthPayload, ApiError>;
    async fn register(&self, req: &RegisterRequest) -> Result<AuthPayload, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn current_user(&self) -> Result<Principal, ApiError>;
    async fn change_password(&self, req: &ChangePasswordRequest) -> Result<(), ApiError>;
}

impl<T: AuthApi> AuthApi for &T {
    async fn login(&self, req: &LoginRequest) -> Result<AuthPayload, ApiError> {
        (**self).login(req).await
    }

    async fn register(&self, req: &RegisterRequest) -> Result<AuthPayload, ApiError> {
        (**self).register(req).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        (**self).logout().await
    }

    async fn current_user(&self) -> Result<Principal, ApiError> {
        (**self).current_user().await
    }

    async fn change_password(&self, req: &ChangePasswordRequest) -> Result<(), ApiError> {
        (**self).change_password(req).await
    }
}

/// Change-password form input, validated before any network call.
#[derive(Clone, Debug, Default)]
pub struct ChangePasswordInput {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ChangePasswordInput {
    /// Client-side validation; only a passing input reaches the network.
    pub fn validate(&self) -> Result<ChangePasswordRequest, String> {
        if self.old_password.is_empty() {
            return Err("Old password is required".to_owned());
        }
        if self.new_password.is_empty() {
            return Err("New password is required".to_owned());
        }
        if self.new_password.len() < 8 {
            return Err("Password must be at least 8 characters long".to_owned());
        }
        if self.new_password == self.old_password {
            return Err("New password must be different from old password".to_owned());
        }
        if self.confirm_password != self.new_password {
            return Err("Passwords do not match".to_owned());
        }
        Ok(ChangePasswordRequest {
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

/// Per-variant auth controller.
///
/// Runs on one logical thread (browser event loop, or a current-thread
/// test runtime); interior mutability is never held across an await.
pub struct AuthController<A, S> {
    variant: Variant,
    api: A,
    store: S,
    state: RefCell<AuthState>,
    on_change: RefCell<Option<Box<dyn Fn(&AuthState)>>>,
}

impl<A: AuthApi, S: SessionStore> AuthController<A, S> {
    /// Create a controller in the `Unknown` phase. Callers must drive
    /// [`Self::revalidate`] before trusting `is_loading()` to clear.
    pub fn new(variant: Variant, api: A, store: S) -> Self {
        Self {
            variant,
            api,
            store,
            state: RefCell::new(AuthState::default()),
            on_change: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Register an observer invoked after every state transition.
    /// The UI layer mirrors transitions into a reactive signal here.
    pub fn set_on_change(&self, observer: impl Fn(&AuthState) + 'static) {
        *self.on_change.borrow_mut() = Some(Box::new(observer));
    }

    fn apply(&self, event: AuthEvent) {
        let next = reduce(&self.state.borrow(), event);
        *self.state.borrow_mut() = next;
        if let Some(observer) = self.on_change.borrow().as_ref() {
            observer(&self.state.borrow());
        }
    }

    /// Mount-time session revalidation.
    ///
    /// A session is only worth checking when both the identity record and
    /// the token are persisted; partial leftovers are cleared without a
    /// network call. The persisted principal is provisional: the server's
    /// answer to `current-user` replaces it on success, and any failure
    /// clears this variant's session and settles `Anonymous`. Completes
    /// before `is_loading()` turns false.
    pub async fn revalidate(&self) {
        let has_principal = session::load_principal(&self.store, self.variant).is_some();
        let has_token = session::load_token(&self.store, self.variant).is_some();
        if !has_principal || !has_token {
            session::clear_session(&self.store, self.variant);
            self.apply(AuthEvent::Deauthorized);
            return;
        }

        match self.api.current_user().await {
            Ok(principal) => {
                let token = session::load_token(&self.store, self.variant);
                session::save_session(&self.store, self.variant, &principal, token.as_deref());
                self.apply(AuthEvent::Revalidated(principal));
            }
            Err(err) => {
                log::info!("{:?} session revalidation failed: {err}", self.variant);
                session::clear_session(&self.store, self.variant);
                self.apply(AuthEvent::Deauthorized);
            }
        }
    }

    /// Log in and persist the session for this variant.
    ///
    /// # Errors
    ///
    /// Returns the normalized request error after recording it in state.
    pub async fn login(&self, req: &LoginRequest) -> Result<Principal, ApiError> {
        self.apply(AuthEvent::AttemptStarted);
        match self.api.login(req).await {
            Ok(payload) => {
                session::save_session(&self.store, self.variant, &payload.user, payload.bearer());
                self.apply(AuthEvent::AttemptSucceeded(payload.user.clone()));
                Ok(payload.user)
            }
            Err(err) => {
                self.apply(AuthEvent::AttemptFailed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Register a new account.
    ///
    /// The User variant signs in immediately; the Admin variant leaves the
    /// session untouched and expects an explicit login afterwards.
    ///
    /// # Errors
    ///
    /// Returns the normalized request error after recording it in state.
    pub async fn register(&self, req: &RegisterRequest) -> Result<Principal, ApiError> {
        self.apply(AuthEvent::AttemptStarted);
        match self.api.register(req).await {
            Ok(payload) => {
                if self.variant.auto_auth_on_register() {
                    session::save_session(
                        &self.store,
                        self.variant,
                        &payload.user,
                        payload.bearer(),
                    );
                    self.apply(AuthEvent::AttemptSucceeded(payload.user.clone()));
                } else {
                    self.apply(AuthEvent::AttemptSettled);
                }
                Ok(payload.user)
            }
            Err(err) => {
                self.apply(AuthEvent::AttemptFailed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Log out. The remote call is best-effort; local session state is
    /// cleared and the phase settles `Anonymous` no matter what.
    pub async fn logout(&self) {
        if let Err(err) = self.api.logout().await {
            log::warn!("{:?} logout request failed: {err}", self.variant);
        }
        session::clear_session(&self.store, self.variant);
        self.apply(AuthEvent::LoggedOut);
    }

    /// Change the password of the authenticated principal.
    ///
    /// Does not alter the session token.
    ///
    /// # Errors
    ///
    /// `ApiError::Validation` if the input fails client-side checks (no
    /// network call is made); otherwise the server error, also recorded in
    /// state.
    pub async fn change_password(&self, input: &ChangePasswordInput) -> Result<(), ApiError> {
        let req = input.validate().map_err(ApiError::Validation)?;
        match self.api.change_password(&req).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.apply(AuthEvent::AttemptFailed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Reset `error` without touching the phase.
    pub fn clear_error(&self) {
        self.apply(AuthEvent::ErrorCleared);
    }
}
