//! # wnd-web
//!
//! Leptos + WASM front end for the product catalog served under
//! `/api/produtos`. Three route-level controllers (create, edit, list) talk to
//! the REST backend and render feedback into a shared message area.
//!
//! Pure view-model logic lives in `state` and `util` so it can be tested
//! natively; everything that touches the browser is gated behind the `csr`
//! feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
