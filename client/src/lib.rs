//! # client
//!
//! Leptos + WASM front end of the GenMentor learning assistant: the routed
//! page shell, layout chrome, theme and notification providers, static
//! configuration, the dashboard's analytics charts, and a typed client for
//! the backend REST surface.
//!
//! The `ssr` feature builds the crate for server rendering inside the
//! `genmentor` host; `hydrate` builds the browser bundle.

pub mod analytics;
pub mod app;
pub mod components;
pub mod config;
pub mod icons;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger already installed: {e}").into());
    }
    log::info!("hydrating {}", config::APP_NAME);
    leptos::mount::hydrate_body(app::App);
}
