use super::*;

#[test]
fn principal_accepts_mongo_style_id() {
    let p: Principal =
        serde_json::from_str(r#"{"_id":"u1","username":"bob","email":"b@x.com"}"#).unwrap();
    assert_eq!(p.id, "u1");
    assert_eq!(p.full_name, None);
}

#[test]
fn auth_payload_prefers_token_over_access_token() {
    let body = r#"{"user":{"id":"u1","username":"bob","email":"b@x.com"},
                   "accessToken":"aaa","token":"ttt"}"#;
    let payload: AuthPayload = serde_json::from_str(body).unwrap();
    assert_eq!(payload.bearer(), Some("ttt"));
}

#[test]
fn auth_payload_falls_back_to_access_token() {
    let body = r#"{"user":{"id":"u1","username":"bob","email":"b@x.com"},"accessToken":"aaa"}"#;
    let payload: AuthPayload = serde_json::from_str(body).unwrap();
    assert_eq!(payload.bearer(), Some("aaa"));
}

#[test]
fn auth_payload_may_carry_no_token() {
    // Cookie-only login responses are valid; the header channel just stays empty.
    let body = r#"{"user":{"id":"u1","username":"bob","email":"b@x.com"}}"#;
    let payload: AuthPayload = serde_json::from_str(body).unwrap();
    assert_eq!(payload.bearer(), None);
}

#[test]
fn envelope_unwraps_data() {
    let body = r#"{"data":{"isRegisterEnabled":true},"message":"ok"}"#;
    let env: Envelope<RegistrationStatus> = serde_json::from_str(body).unwrap();
    assert!(env.data.is_register_enabled);
    assert_eq!(env.message.as_deref(), Some("ok"));
}

#[test]
fn service_defaults_for_missing_fields() {
    let s: Service = serde_json::from_str(r#"{"_id":"s1","title":"Cloud Migration"}"#).unwrap();
    assert!(!s.is_active);
    assert_eq!(s.order, 0);
    assert_eq!(s.price, None);
}

#[test]
fn change_password_request_uses_camel_case() {
    let req = ChangePasswordRequest {
        old_password: "old-secret".to_owned(),
        new_password: "new-secret".to_owned(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["oldPassword"], "old-secret");
    assert_eq!(json["newPassword"], "new-secret");
}
