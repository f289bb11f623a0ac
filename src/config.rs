//! API base URL and endpoint catalog.
//!
//! Endpoint strings are part of the backend contract and must not drift;
//! `config_test.rs` pins them. Paths with an `:id` segment are exposed as
//! builder functions instead of templates.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Backend base URL, fixed at compile time. Defaults to same-origin `/api`
/// so a reverse proxy can front the backend in development and production.
#[must_use]
pub fn api_base_url() -> &'static str {
    match option_env!("API_BASE_URL") {
        Some(url) => url.trim_end_matches('/'),
        None => "/api",
    }
}

/// Join an endpoint path onto the base URL.
#[must_use]
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base_url())
}

// =============================================================================
// AUTH (shared by the User and Admin variants)
// =============================================================================

pub const LOGIN: &str = "/users/login";
pub const REGISTER: &str = "/users/register";
pub const LOGOUT: &str = "/users/logout";
pub const CHANGE_PASSWORD: &str = "/users/change-password";
pub const CURRENT_USER: &str = "/users/current-user";

// =============================================================================
// REGISTRATION GATE
// =============================================================================

/// GET reads `{ isRegisterEnabled }`, PUT updates it (admin only).
pub const REGISTRATION_STATUS: &str = "/registration/status";

// =============================================================================
// SERVICES
// =============================================================================

pub const ALL_SERVICES: &str = "/service/all-services";
pub const CREATE_SERVICE: &str = "/service/create-service";

#[must_use]
pub fn service_by_id(id: &str) -> String {
    format!("/service/service/{id}")
}

#[must_use]
pub fn update_service(id: &str) -> String {
    format!("/service/update-service/{id}")
}

#[must_use]
pub fn delete_service(id: &str) -> String {
    format!("/service/delete-service/{id}")
}

#[must_use]
pub fn toggle_service(id: &str) -> String {
    format!("/service/toggle-service/{id}")
}

// =============================================================================
// SERVICE CATEGORIES
// =============================================================================

pub const ALL_CATEGORIES: &str = "/service/all-categories";
pub const CREATE_CATEGORY: &str = "/service/create-category";

#[must_use]
pub fn update_category(id: &str) -> String {
    format!("/service/update-category/{id}")
}

#[must_use]
pub fn delete_category(id: &str) -> String {
    format!("/service/delete-category/{id}")
}

#[must_use]
pub fn toggle_category(id: &str) -> String {
    format!("/service/active-deactive-category/{id}")
}

// =============================================================================
// CONSULTATIONS (contact-form enquiries)
// =============================================================================

pub const CREATE_CONSULTATION: &str = "/consultation/create";
pub const ALL_CONSULTATIONS: &str = "/consultation/all";

#[must_use]
pub fn consultation_by_id(id: &str) -> String {
    format!("/consultation/{id}")
}

#[must_use]
pub fn consultation_status(id: &str) -> String {
    format!("/consultation/{id}/status")
}
