use super::*;

#[test]
fn enabled_flag_opens_the_gate() {
    assert_eq!(GateState::from_fetch(Ok(true)), GateState::Enabled);
    assert!(GateState::from_fetch(Ok(true)).is_enabled());
}

#[test]
fn disabled_flag_closes_the_gate() {
    assert_eq!(GateState::from_fetch(Ok(false)), GateState::Disabled);
}

#[test]
fn fetch_error_fails_closed() {
    assert_eq!(GateState::from_fetch(Err(ApiError::Network)), GateState::Disabled);
    assert_eq!(
        GateState::from_fetch(Err(ApiError::from_response(500, "boom"))),
        GateState::Disabled
    );
}

#[test]
fn default_is_checking_not_enabled() {
    assert_eq!(GateState::default(), GateState::Checking);
    assert!(!GateState::default().is_enabled());
}
