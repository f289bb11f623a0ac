//! Application state: the auth state machine and the registration gate.

pub mod auth;
pub mod registration;
