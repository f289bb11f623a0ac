//! User-facing auth pages and dashboard.

pub mod dashboard;
pub mod login;
pub mod register;
