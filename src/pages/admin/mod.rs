//! Admin back-office pages.

pub mod categories;
pub mod change_password;
pub mod dashboard;
pub mod enquiries;
pub mod login;
pub mod register;
pub mod registration_settings;
pub mod services;
