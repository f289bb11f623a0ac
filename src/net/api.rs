//! Typed API surface for the backend.
//!
//! Thin wrappers pairing endpoint constants from [`crate::config`] with the
//! wire types in [`crate::net::types`]. Auth operations are grouped behind
//! [`HttpAuthApi`], the production implementation of
//! [`AuthApi`](crate::auth::AuthApi) the controllers are tested against.

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

use serde::Deserialize;
use serde_json::json;

use crate::auth::{AuthApi, Variant};
use crate::config;
use crate::net::error::ApiError;
use crate::net::http::{self, Auth};
use crate::net::types::{
    AuthPayload, Category, CategoryInput, ChangePasswordRequest, Consultation, ConsultationInput,
    CurrentUserPayload, Envelope, LoginRequest, Principal, RegisterRequest, RegistrationStatus,
    Service, ServiceInput,
};

/// List endpoints answer either `{ "data": [...] }` or a bare array
/// depending on the handler; accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListBody<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// Keep only active entries, ordered by their display `order`.
fn active_sorted<T>(items: Vec<T>, is_active: impl Fn(&T) -> bool, order: impl Fn(&T) -> i64) -> Vec<T> {
    let mut items: Vec<T> = items.into_iter().filter(|item| is_active(item)).collect();
    items.sort_by_key(|item| order(item));
    items
}

// =============================================================================
// AUTH
// =============================================================================

/// Backend-backed [`AuthApi`] for one variant. Both variants share the
/// `/users/*` endpoints; only the attached token differs.
#[derive(Clone, Copy, Debug)]
pub struct HttpAuthApi {
    variant: Variant,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    fn auth(&self) -> Auth {
        Auth::Bearer(self.variant)
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, req: &LoginRequest) -> Result<AuthPayload, ApiError> {
        let env: Envelope<AuthPayload> = http::post(config::LOGIN, req, self.auth()).await?;
        Ok(env.data)
    }

    async fn register(&self, req: &RegisterRequest) -> Result<AuthPayload, ApiError> {
        let env: Envelope<AuthPayload> = http::post(config::REGISTER, req, self.auth()).await?;
        Ok(env.data)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        http::post_discard::<()>(config::LOGOUT, None, self.auth()).await
    }

    async fn current_user(&self) -> Result<Principal, ApiError> {
        let env: Envelope<CurrentUserPayload> = http::get(config::CURRENT_USER, self.auth()).await?;
        Ok(env.data.user)
    }

    async fn change_password(&self, req: &ChangePasswordRequest) -> Result<(), ApiError> {
        http::post_discard(config::CHANGE_PASSWORD, Some(req), self.auth()).await
    }
}

// =============================================================================
// REGISTRATION GATE
// =============================================================================

/// Read the remote `isRegisterEnabled` flag.
///
/// # Errors
///
/// Propagates the request error; callers fold it fail-closed via
/// [`GateState::from_fetch`](crate::state::registration::GateState::from_fetch).
pub async fn fetch_registration_status() -> Result<bool, ApiError> {
    let env: Envelope<RegistrationStatus> = http::get(config::REGISTRATION_STATUS, Auth::None).await?;
    Ok(env.data.is_register_enabled)
}

/// Update the flag (admin only), returning the new value.
///
/// # Errors
///
/// Normalized request error.
pub async fn update_registration_status(enabled: bool) -> Result<bool, ApiError> {
    let body = RegistrationStatus { is_register_enabled: enabled };
    let env: Envelope<RegistrationStatus> =
        http::put(config::REGISTRATION_STATUS, &body, Auth::Bearer(Variant::Admin)).await?;
    Ok(env.data.is_register_enabled)
}

// =============================================================================
// SERVICES
// =============================================================================

/// Active services for the public site, sorted by display order.
///
/// # Errors
///
/// Normalized request error.
pub async fn fetch_active_services() -> Result<Vec<Service>, ApiError> {
    let body: ListBody<Service> = http::get(config::ALL_SERVICES, Auth::None).await?;
    Ok(active_sorted(body.into_vec(), |s| s.is_active, |s| s.order))
}

/// Every service, active or not, for the admin management screen.
///
/// # Errors
///
/// Normalized request error.
pub async fn fetch_all_services() -> Result<Vec<Service>, ApiError> {
    let body: ListBody<Service> = http::get(config::ALL_SERVICES, Auth::Bearer(Variant::Admin)).await?;
    Ok(body.into_vec())
}

/// One service by id, for the public detail page.
///
/// # Errors
///
/// Normalized request error.
pub async fn fetch_service(id: &str) -> Result<Service, ApiError> {
    let env: Envelope<Service> = http::get(&config::service_by_id(id), Auth::None).await?;
    Ok(env.data)
}

/// # Errors
///
/// Normalized request error.
pub async fn create_service(input: &ServiceInput) -> Result<(), ApiError> {
    http::post_discard(config::CREATE_SERVICE, Some(input), Auth::Bearer(Variant::Admin)).await
}

/// # Errors
///
/// Normalized request error.
pub async fn update_service(id: &str, input: &ServiceInput) -> Result<(), ApiError> {
    http::put_discard(&config::update_service(id), input, Auth::Bearer(Variant::Admin)).await
}

/// # Errors
///
/// Normalized request error.
pub async fn delete_service(id: &str) -> Result<(), ApiError> {
    http::delete_discard(&config::delete_service(id), Auth::Bearer(Variant::Admin)).await
}

/// Flip a service's active flag.
///
/// # Errors
///
/// Normalized request error.
pub async fn toggle_service(id: &str) -> Result<(), ApiError> {
    http::patch_discard::<()>(&config::toggle_service(id), None, Auth::Bearer(Variant::Admin)).await
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// Active categories for the public site, sorted by display order.
///
/// # Errors
///
/// Normalized request error.
pub async fn fetch_active_categories() -> Result<Vec<Category>, ApiError> {
    let body: ListBody<Category> = http::get(config::ALL_CATEGORIES, Auth::None).await?;
    Ok(active_sorted(body.into_vec(), |c| c.is_active, |c| c.order))
}

/// # Errors
///
/// Normalized request error.
pub async fn fetch_all_categories() -> Result<Vec<Category>, ApiError> {
    let body: ListBody<Category> =
        http::get(config::ALL_CATEGORIES, Auth::Bearer(Variant::Admin)).await?;
    Ok(body.into_vec())
}

/// # Errors
///
/// Normalized request error.
pub async fn create_category(input: &CategoryInput) -> Result<(), ApiError> {
    http::post_discard(config::CREATE_CATEGORY, Some(input), Auth::Bearer(Variant::Admin)).await
}

/// # Errors
///
/// Normalized request error.
pub async fn update_category(id: &str, input: &CategoryInput) -> Result<(), ApiError> {
    http::put_discard(&config::update_category(id), input, Auth::Bearer(Variant::Admin)).await
}

/// # Errors
///
/// Normalized request error.
pub async fn delete_category(id: &str) -> Result<(), ApiError> {
    http::delete_discard(&config::delete_category(id), Auth::Bearer(Variant::Admin)).await
}

/// # Errors
///
/// Normalized request error.
pub async fn toggle_category(id: &str) -> Result<(), ApiError> {
    http::patch_discard::<()>(&config::toggle_category(id), None, Auth::Bearer(Variant::Admin)).await
}

// =============================================================================
// CONSULTATIONS
// =============================================================================

/// Submit a contact-form enquiry. Public, no credential.
///
/// # Errors
///
/// Normalized request error.
pub async fn submit_consultation(input: &ConsultationInput) -> Result<(), ApiError> {
    http::post_discard(config::CREATE_CONSULTATION, Some(input), Auth::None).await
}

/// All enquiries, for the admin screen.
///
/// # Errors
///
/// Normalized request error.
pub async fn fetch_consultations() -> Result<Vec<Consultation>, ApiError> {
    let body: ListBody<Consultation> =
        http::get(config::ALL_CONSULTATIONS, Auth::Bearer(Variant::Admin)).await?;
    Ok(body.into_vec())
}

/// # Errors
///
/// Normalized request error.
pub async fn update_consultation_status(id: &str, status: &str) -> Result<(), ApiError> {
    let body = json!({ "status": status });
    http::patch_discard(&config::consultation_status(id), Some(&body), Auth::Bearer(Variant::Admin))
        .await
}

/// # Errors
///
/// Normalized request error.
pub async fn delete_consultation(id: &str) -> Result<(), ApiError> {
    http::delete_discard(&config::consultation_by_id(id), Auth::Bearer(Variant::Admin)).await
}
