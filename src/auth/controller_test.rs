use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::session::MemoryStore;
use crate::state::auth::AuthPhase;

/// Scripted [`AuthApi`]. Each slot holds the response the next call gets;
/// a call against an empty slot is a test failure.
#[derive(Default)]
struct MockApi {
    login: RefCell<Option<Result<AuthPayload, ApiError>>>,
    register: RefCell<Option<Result<AuthPayload, ApiError>>>,
    logout: RefCell<Option<Result<(), ApiError>>>,
    current_user: RefCell<Option<Result<Principal, ApiError>>>,
    change_password: RefCell<Option<Result<(), ApiError>>>,
    change_password_calls: Cell<usize>,
}

impl AuthApi for MockApi {
    async fn login(&self, _req: &LoginRequest) -> Result<AuthPayload, ApiError> {
        self.login.borrow().clone().expect("unexpected login call")
    }

    async fn register(&self, _req: &RegisterRequest) -> Result<AuthPayload, ApiError> {
        self.register.borrow().clone().expect("unexpected register call")
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout.borrow().clone().expect("unexpected logout call")
    }

    async fn current_user(&self) -> Result<Principal, ApiError> {
        self.current_user.borrow().clone().expect("unexpected current-user call")
    }

    async fn change_password(&self, _req: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.change_password_calls.set(self.change_password_calls.get() + 1);
        self.change_password.borrow().clone().expect("unexpected change-password call")
    }
}

fn principal(id: &str) -> Principal {
    Principal {
        id: id.to_owned(),
        username: "bob".to_owned(),
        email: "b@x.com".to_owned(),
        full_name: None,
    }
}

fn payload(id: &str, token: Option<&str>) -> AuthPayload {
    AuthPayload {
        user: principal(id),
        access_token: None,
        token: token.map(str::to_owned),
    }
}

fn login_req() -> LoginRequest {
    LoginRequest { email: "b@x.com".to_owned(), password: "longenough1".to_owned() }
}

fn register_req() -> RegisterRequest {
    RegisterRequest {
        username: "bob".to_owned(),
        email: "b@x.com".to_owned(),
        password: "longenough1".to_owned(),
        full_name: None,
    }
}

fn unauthorized() -> ApiError {
    ApiError::from_response(401, r#"{"message":"jwt expired"}"#)
}

// =============================================================
// Login
// =============================================================

#[tokio::test]
async fn login_authenticates_and_persists_session() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    *api.login.borrow_mut() = Some(Ok(payload("u1", Some("tok-1"))));

    let ctl = AuthController::new(Variant::User, &api, &store);
    let user = ctl.login(&login_req()).await.unwrap();

    assert_eq!(user.id, "u1");
    assert!(ctl.state().is_authenticated());
    assert!(!ctl.state().is_loading());
    assert_eq!(crate::session::load_token(&store, Variant::User).as_deref(), Some("tok-1"));
    assert_eq!(crate::session::load_principal(&store, Variant::User).unwrap().id, "u1");
}

#[tokio::test]
async fn failed_login_records_error_and_rethrows() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    *api.login.borrow_mut() =
        Some(Err(ApiError::from_response(400, r#"{"message":"Invalid credentials"}"#)));

    let ctl = AuthController::new(Variant::User, &api, &store);
    let err = ctl.login(&login_req()).await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid credentials");
    let state = ctl.state();
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    assert!(!state.is_authenticated());
    assert!(crate::session::load_principal(&store, Variant::User).is_none());
}

#[tokio::test]
async fn failed_login_keeps_existing_authentication() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    *api.login.borrow_mut() = Some(Ok(payload("u1", Some("tok-1"))));

    let ctl = AuthController::new(Variant::User, &api, &store);
    ctl.login(&login_req()).await.unwrap();

    *api.login.borrow_mut() = Some(Err(ApiError::from_response(400, "wrong password")));
    assert!(ctl.login(&login_req()).await.is_err());

    let state = ctl.state();
    assert!(state.is_authenticated());
    assert_eq!(state.principal().unwrap().id, "u1");
    assert_eq!(state.error.as_deref(), Some("wrong password"));
}

#[tokio::test]
async fn observer_sees_pending_then_settled() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    *api.login.borrow_mut() = Some(Ok(payload("u1", Some("tok-1"))));

    let ctl = AuthController::new(Variant::User, &api, &store);
    let seen: Rc<RefCell<Vec<AuthState>>> = Rc::default();
    let sink = Rc::clone(&seen);
    ctl.set_on_change(move |state| sink.borrow_mut().push(state.clone()));

    ctl.login(&login_req()).await.unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].pending);
    assert!(seen[1].is_authenticated());
}

// =============================================================
// Variant isolation
// =============================================================

#[tokio::test]
async fn user_operations_leave_admin_untouched() {
    let store = MemoryStore::default();
    let user_api = MockApi::default();
    let admin_api = MockApi::default();

    let admin = AuthController::new(Variant::Admin, &admin_api, &store);
    admin.revalidate().await; // empty store settles Anonymous
    let admin_before = admin.state();

    crate::session::save_session(&store, Variant::Admin, &principal("a1"), Some("admin-tok"));

    let user = AuthController::new(Variant::User, &user_api, &store);
    *user_api.login.borrow_mut() = Some(Ok(payload("u1", Some("user-tok"))));
    user.login(&login_req()).await.unwrap();
    *user_api.logout.borrow_mut() = Some(Ok(()));
    user.logout().await;

    assert_eq!(admin.state(), admin_before);
    assert_eq!(crate::session::load_token(&store, Variant::Admin).as_deref(), Some("admin-tok"));
    assert_eq!(crate::session::load_principal(&store, Variant::Admin).unwrap().id, "a1");
}

// =============================================================
// Logout
// =============================================================

#[tokio::test]
async fn logout_clears_state_even_when_remote_call_fails() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    *api.login.borrow_mut() = Some(Ok(payload("u1", Some("tok-1"))));

    let ctl = AuthController::new(Variant::User, &api, &store);
    ctl.login(&login_req()).await.unwrap();

    *api.logout.borrow_mut() = Some(Err(ApiError::Network));
    ctl.logout().await;

    assert!(!ctl.state().is_authenticated());
    assert_eq!(ctl.state().phase, AuthPhase::Anonymous);
    assert!(crate::session::load_principal(&store, Variant::User).is_none());
    assert!(crate::session::load_token(&store, Variant::User).is_none());
}

// =============================================================
// Revalidation
// =============================================================

#[tokio::test]
async fn revalidation_adopts_fresh_principal_over_cached_copy() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    crate::session::save_session(&store, Variant::User, &principal("u1"), Some("tok-1"));

    let mut fresh = principal("u1");
    fresh.username = "robert".to_owned();
    *api.current_user.borrow_mut() = Some(Ok(fresh));

    let ctl = AuthController::new(Variant::User, &api, &store);
    assert!(ctl.state().is_loading());
    ctl.revalidate().await;

    let state = ctl.state();
    assert!(!state.is_loading());
    assert_eq!(state.principal().unwrap().username, "robert");
    // Persisted copy follows the server's answer.
    assert_eq!(crate::session::load_principal(&store, Variant::User).unwrap().username, "robert");
}

#[tokio::test]
async fn rejected_token_downgrades_silently_and_clears_storage() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    crate::session::save_session(&store, Variant::User, &principal("u1"), Some("stale-tok"));
    *api.current_user.borrow_mut() = Some(Err(unauthorized()));

    let ctl = AuthController::new(Variant::User, &api, &store);
    ctl.revalidate().await;

    let state = ctl.state();
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert_eq!(state.error, None);
    assert!(crate::session::load_principal(&store, Variant::User).is_none());
    assert!(crate::session::load_token(&store, Variant::User).is_none());
}

#[tokio::test]
async fn empty_store_settles_anonymous_without_network_call() {
    // current_user slot is empty: a call would panic the test.
    let api = MockApi::default();
    let store = MemoryStore::default();

    let ctl = AuthController::new(Variant::Admin, &api, &store);
    ctl.revalidate().await;

    assert_eq!(ctl.state().phase, AuthPhase::Anonymous);
}

#[tokio::test]
async fn orphan_token_is_cleared_without_network_call() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    store.set(Variant::Admin.token_key(), "orphan-tok");

    let ctl = AuthController::new(Variant::Admin, &api, &store);
    ctl.revalidate().await;

    assert_eq!(ctl.state().phase, AuthPhase::Anonymous);
    assert!(crate::session::load_token(&store, Variant::Admin).is_none());
}

#[tokio::test]
async fn orphan_principal_is_cleared_without_network_call() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    crate::session::save_session(&store, Variant::User, &principal("u1"), None);

    let ctl = AuthController::new(Variant::User, &api, &store);
    ctl.revalidate().await;

    assert_eq!(ctl.state().phase, AuthPhase::Anonymous);
    assert!(crate::session::load_principal(&store, Variant::User).is_none());
}

#[tokio::test]
async fn login_then_reload_round_trips_through_storage() {
    let store = MemoryStore::default();

    let api = MockApi::default();
    *api.login.borrow_mut() = Some(Ok(payload("u1", Some("tok-1"))));
    let ctl = AuthController::new(Variant::User, &api, &store);
    ctl.login(&login_req()).await.unwrap();
    drop(ctl);

    // Page-reload equivalent: a fresh controller over the same store.
    let api = MockApi::default();
    *api.current_user.borrow_mut() = Some(Ok(principal("u1")));
    let ctl = AuthController::new(Variant::User, &api, &store);
    ctl.revalidate().await;

    let state = ctl.state();
    assert!(state.is_authenticated());
    assert_eq!(state.principal().unwrap().id, "u1");
}

// =============================================================
// Register asymmetry
// =============================================================

#[tokio::test]
async fn user_register_authenticates_immediately() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    *api.register.borrow_mut() = Some(Ok(payload("u2", Some("tok-2"))));

    let ctl = AuthController::new(Variant::User, &api, &store);
    ctl.register(&register_req()).await.unwrap();

    assert!(ctl.state().is_authenticated());
    assert_eq!(crate::session::load_principal(&store, Variant::User).unwrap().id, "u2");
}

#[tokio::test]
async fn admin_register_does_not_establish_a_session() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    *api.register.borrow_mut() = Some(Ok(payload("a2", None)));

    let ctl = AuthController::new(Variant::Admin, &api, &store);
    ctl.revalidate().await;
    ctl.register(&register_req()).await.unwrap();

    let state = ctl.state();
    assert!(!state.is_authenticated());
    assert!(!state.pending);
    assert_eq!(state.error, None);
    assert!(crate::session::load_principal(&store, Variant::Admin).is_none());
    assert!(crate::session::load_token(&store, Variant::Admin).is_none());
}

// =============================================================
// Change password
// =============================================================

#[tokio::test]
async fn change_password_rejects_unchanged_password_before_network() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    let ctl = AuthController::new(Variant::User, &api, &store);

    let input = ChangePasswordInput {
        old_password: "a".to_owned(),
        new_password: "a".to_owned(),
        confirm_password: "a".to_owned(),
    };
    let err = ctl.change_password(&input).await.unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(api.change_password_calls.get(), 0);
    // Validation failures are field-level; shared state stays clean.
    assert_eq!(ctl.state().error, None);
}

#[tokio::test]
async fn change_password_rejects_short_password_before_network() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    let ctl = AuthController::new(Variant::User, &api, &store);

    let input = ChangePasswordInput {
        old_password: "a".to_owned(),
        new_password: "short".to_owned(),
        confirm_password: "short".to_owned(),
    };
    let err = ctl.change_password(&input).await.unwrap_err();

    assert_eq!(err.to_string(), "Password must be at least 8 characters long");
    assert_eq!(api.change_password_calls.get(), 0);
}

#[tokio::test]
async fn change_password_rejects_mismatched_confirmation_before_network() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    let ctl = AuthController::new(Variant::User, &api, &store);

    let input = ChangePasswordInput {
        old_password: "a".to_owned(),
        new_password: "longenough1".to_owned(),
        confirm_password: "longenough2".to_owned(),
    };
    let err = ctl.change_password(&input).await.unwrap_err();

    assert_eq!(err.to_string(), "Passwords do not match");
    assert_eq!(api.change_password_calls.get(), 0);
}

#[tokio::test]
async fn valid_change_password_reaches_network_once() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    *api.change_password.borrow_mut() = Some(Ok(()));
    let ctl = AuthController::new(Variant::User, &api, &store);

    let input = ChangePasswordInput {
        old_password: "a".to_owned(),
        new_password: "longenough1".to_owned(),
        confirm_password: "longenough1".to_owned(),
    };
    ctl.change_password(&input).await.unwrap();

    assert_eq!(api.change_password_calls.get(), 1);
}

#[tokio::test]
async fn change_password_server_error_surfaces_in_state() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    *api.change_password.borrow_mut() =
        Some(Err(ApiError::from_response(400, r#"{"message":"Old password incorrect"}"#)));
    let ctl = AuthController::new(Variant::User, &api, &store);

    let input = ChangePasswordInput {
        old_password: "a".to_owned(),
        new_password: "longenough1".to_owned(),
        confirm_password: "longenough1".to_owned(),
    };
    assert!(ctl.change_password(&input).await.is_err());
    assert_eq!(ctl.state().error.as_deref(), Some("Old password incorrect"));
}

// =============================================================
// clear_error
// =============================================================

#[tokio::test]
async fn clear_error_resets_error_only() {
    let api = MockApi::default();
    let store = MemoryStore::default();
    *api.login.borrow_mut() = Some(Err(ApiError::from_response(400, "nope")));

    let ctl = AuthController::new(Variant::User, &api, &store);
    ctl.revalidate().await;
    let _ = ctl.login(&login_req()).await;
    assert!(ctl.state().error.is_some());

    ctl.clear_error();
    assert_eq!(ctl.state().error, None);
    assert_eq!(ctl.state().phase, AuthPhase::Anonymous);
}
