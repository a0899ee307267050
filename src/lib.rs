//! # budgie-web
//!
//! Leptos + WASM frontend for Budgie's authentication flow: log in,
//! registration, and session-gated routing.
//!
//! This crate contains pages, components, application state, the GraphQL
//! transport, and the validation/debounce utilities the registration form is
//! built on. Browser-only behavior lives behind the `csr` feature so the state
//! layer compiles and tests natively.

pub mod app;
pub mod components;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: resolve the deployment, install logging, mount the app.
///
/// An unrecognized origin aborts initialization before anything is mounted.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use crate::app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = match util::env::EnvConfig::from_window() {
        Ok(config) => config,
        Err(e) => wasm_bindgen::throw_str(&e.to_string()),
    };

    leptos::mount::mount_to_body(move || view! { <App config/> });
}
