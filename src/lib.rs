//! Vinilos - tattoo and piercing studio site
//!
//! Public piercing and tattoo catalogs plus a token-protected admin panel,
//! built with Leptos and backed by the studio's REST API.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
