//! # stratus
//!
//! Leptos + WASM frontend for the Stratus cloud-consulting site: public
//! marketing pages, a user dashboard, and an admin back-office, all wired
//! to the REST backend through a thin normalized HTTP layer.
//!
//! The auth core (session store, per-variant controllers, route guards,
//! registration gate) is plain Rust with no browser dependency and is
//! tested on the host against mock transports; browser-only code sits
//! behind the `hydrate` feature.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
