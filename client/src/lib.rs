//! # client
//!
//! Leptos + WASM frontend for the lead finder. A user types a niche, the
//! page posts it to the lead-search endpoint, and the reply is rendered as
//! a list of lead cards.
//!
//! The pipeline runs validator -> request controller -> response
//! interpreter -> lead normalizer -> card renderer, one cycle per search.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
