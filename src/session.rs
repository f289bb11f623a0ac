//! Persisted session storage, keyed per principal variant.
//!
//! ARCHITECTURE
//! ============
//! Business logic never touches `localStorage` directly; it goes through the
//! injected [`SessionStore`] trait so the auth controllers stay testable on
//! the host. The browser implementation is a thin shim over
//! `web_sys::Storage`; tests and SSR use [`MemoryStore`].
//!
//! User and Admin sessions live under disjoint keys (`user`/`userToken` vs
//! `admin`/`adminToken`) and never read each other's entries.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::auth::Variant;
use crate::net::types::Principal;

/// Durable key/value storage for sessions.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

impl<S: SessionStore + ?Sized> SessionStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// Load the persisted principal for a variant.
///
/// A value that fails to parse counts as absent; storage can be cleared or
/// corrupted out-of-band and that must resolve to "unauthenticated", not an
/// error.
pub fn load_principal(store: &impl SessionStore, variant: Variant) -> Option<Principal> {
    let raw = store.get(variant.principal_key())?;
    serde_json::from_str(&raw).ok()
}

/// Load the persisted bearer token for a variant.
pub fn load_token(store: &impl SessionStore, variant: Variant) -> Option<String> {
    store.get(variant.token_key())
}

/// Persist a session after a successful login or register.
///
/// When the response carried no token, any stale token under this variant
/// is removed so it cannot outlive the identity it belonged to; such a
/// tokenless record does not survive the next revalidation.
pub fn save_session(
    store: &impl SessionStore,
    variant: Variant,
    principal: &Principal,
    token: Option<&str>,
) {
    if let Ok(json) = serde_json::to_string(principal) {
        store.set(variant.principal_key(), &json);
    }
    match token {
        Some(token) => store.set(variant.token_key(), token),
        None => store.remove(variant.token_key()),
    }
}

/// Remove both session keys for a variant.
pub fn clear_session(store: &impl SessionStore, variant: Variant) {
    store.remove(variant.principal_key());
    store.remove(variant.token_key());
}

/// In-memory store for tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `localStorage`-backed store used in the browser.
///
/// Storage access can fail (private browsing, disabled storage); reads
/// resolve to `None` and writes are dropped silently in that case.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "hydrate")]
impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
