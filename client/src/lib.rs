//! # client
//!
//! Leptos + WASM front-end for the car marketplace.
//!
//! The session reconciler from `marketplace-session` is mounted once in
//! [`app::App`]; everything else reads its snapshot from context. Browser-only
//! glue (identity provider bindings, `localStorage`, HTTP) is gated behind the
//! `csr` feature so the pure helpers stay testable natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
