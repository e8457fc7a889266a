//! # client
//!
//! Leptos + WASM frontend for the flag-recognition application.
//!
//! The crate is organised around one piece of cross-cutting logic: the
//! session store in [`state::session`]. Route guards, the login/register
//! forms, and the navigation bar all read or drive that store; every other
//! page is a thin consumer of the HTTP helpers in [`net::api`].

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered [`app::App`].
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
