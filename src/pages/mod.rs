//! Pages: public marketing site, user area, and admin back-office.

pub mod about;
pub mod admin;
pub mod career;
pub mod case_studies;
pub mod contact;
pub mod home;
pub mod service_detail;
pub mod services;
pub mod user;
