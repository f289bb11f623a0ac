use super::*;

#[test]
fn base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}

#[test]
fn api_url_joins_base_and_path() {
    let url = api_url("/users/login");
    assert!(url.ends_with("/users/login"));
    assert!(url.starts_with(api_base_url()));
}

#[test]
fn auth_endpoints_match_backend_contract() {
    assert_eq!(LOGIN, "/users/login");
    assert_eq!(REGISTER, "/users/register");
    assert_eq!(LOGOUT, "/users/logout");
    assert_eq!(CHANGE_PASSWORD, "/users/change-password");
    assert_eq!(CURRENT_USER, "/users/current-user");
    assert_eq!(REGISTRATION_STATUS, "/registration/status");
}

#[test]
fn service_endpoints_match_backend_contract() {
    assert_eq!(ALL_SERVICES, "/service/all-services");
    assert_eq!(CREATE_SERVICE, "/service/create-service");
    assert_eq!(service_by_id("s1"), "/service/service/s1");
    assert_eq!(update_service("s1"), "/service/update-service/s1");
    assert_eq!(delete_service("s1"), "/service/delete-service/s1");
    assert_eq!(toggle_service("s1"), "/service/toggle-service/s1");
}

#[test]
fn category_endpoints_match_backend_contract() {
    assert_eq!(ALL_CATEGORIES, "/service/all-categories");
    assert_eq!(CREATE_CATEGORY, "/service/create-category");
    assert_eq!(update_category("c1"), "/service/update-category/c1");
    assert_eq!(delete_category("c1"), "/service/delete-category/c1");
    assert_eq!(toggle_category("c1"), "/service/active-deactive-category/c1");
}

#[test]
fn consultation_endpoints_match_backend_contract() {
    assert_eq!(CREATE_CONSULTATION, "/consultation/create");
    assert_eq!(ALL_CONSULTATIONS, "/consultation/all");
    assert_eq!(consultation_by_id("e1"), "/consultation/e1");
    assert_eq!(consultation_status("e1"), "/consultation/e1/status");
}
