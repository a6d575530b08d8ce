#![recursion_limit = "256"]

// lib.rs - Root module for the hrgptai_site library
//
// The same crate builds the SSR server (`ssr`) and the WASM bundle that
// hydrates the server-rendered pages (`hydrate`).

pub mod web_app;

/// Browser entry point: attach the client-side app to the server-rendered body
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
