//! # client
//!
//! Leptos frontend for the work-certificate evaluation service.
//!
//! This crate contains pages, components, view state, and the HTTP client
//! for the evaluation backend. The `certeval` binary renders it on the server
//! (`ssr` feature); the browser build hydrates it (`hydrate` feature).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
