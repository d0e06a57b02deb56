//! # client
//!
//! Leptos + WASM frontend for the hotel booking site: the booking-assistant
//! chat sidebar, the room catalog, and the admin room-creation form.
//!
//! This crate contains pages, components, application state, and the REST
//! helpers for the booking server's JSON endpoints. The same crate renders on
//! the server (`ssr`) and hydrates in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
