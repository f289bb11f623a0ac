//! Authentication: principal variants and the generic controller.

pub mod controller;

pub use controller::{AuthApi, AuthController, ChangePasswordInput};

/// One of the two independent principal kinds.
///
/// User and Admin sessions share backend endpoints but have disjoint
/// storage keys, routes, and authorization scope. A variant's controller
/// and guards never consult the other variant's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    User,
    Admin,
}

impl Variant {
    /// Storage key holding the serialized principal.
    #[must_use]
    pub fn principal_key(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Storage key holding the bearer token.
    #[must_use]
    pub fn token_key(self) -> &'static str {
        match self {
            Self::User => "userToken",
            Self::Admin => "adminToken",
        }
    }

    /// Login route a protected-route redirect lands on.
    #[must_use]
    pub fn login_route(self) -> &'static str {
        match self {
            Self::User => "/user/login",
            Self::Admin => "/admin/login",
        }
    }

    /// Dashboard route a guest-route redirect lands on.
    #[must_use]
    pub fn dashboard_route(self) -> &'static str {
        match self {
            Self::User => "/user/dashboard",
            Self::Admin => "/admin/dashboard",
        }
    }

    /// Whether a successful register establishes a session immediately.
    /// Users are signed in right away; admins go through an explicit login.
    #[must_use]
    pub fn auto_auth_on_register(self) -> bool {
        match self {
            Self::User => true,
            Self::Admin => false,
        }
    }
}
