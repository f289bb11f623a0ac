use super::*;

// =============================================================
// Message extraction priority
// =============================================================

#[test]
fn plain_text_body_is_used_verbatim() {
    assert_eq!(extract_message(500, "database is down"), "database is down");
}

#[test]
fn json_string_body_is_unwrapped() {
    assert_eq!(extract_message(400, r#""bad request""#), "bad request");
}

#[test]
fn message_field_wins_over_error_and_msg() {
    let body = r#"{"message":"from message","error":"from error","msg":"from msg"}"#;
    assert_eq!(extract_message(400, body), "from message");
}

#[test]
fn error_field_wins_over_msg() {
    let body = r#"{"error":"from error","msg":"from msg"}"#;
    assert_eq!(extract_message(400, body), "from error");
}

#[test]
fn msg_field_is_last_named_fallback() {
    assert_eq!(extract_message(400, r#"{"msg":"from msg"}"#), "from msg");
}

#[test]
fn unknown_object_is_stringified() {
    assert_eq!(extract_message(422, r#"{"fields":["email"]}"#), r#"{"fields":["email"]}"#);
}

#[test]
fn empty_body_falls_back_to_status_line() {
    assert_eq!(extract_message(503, ""), "HTTP error! status: 503");
}

#[test]
fn non_string_named_fields_are_ignored() {
    // `message` holds a number, so it cannot be a display message.
    assert_eq!(extract_message(400, r#"{"message":42}"#), r#"{"message":42}"#);
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn from_response_carries_status_and_message() {
    let err = ApiError::from_response(401, r#"{"message":"invalid token"}"#);
    assert_eq!(err, ApiError::Status { status: 401, message: "invalid token".to_owned() });
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "invalid token");
}

#[test]
fn network_error_has_fixed_message() {
    assert_eq!(ApiError::Network.to_string(), "Network error: no response received");
}

#[test]
fn only_401_counts_as_unauthorized() {
    assert!(!ApiError::from_response(403, "").is_unauthorized());
    assert!(!ApiError::Network.is_unauthorized());
}
