//! Web UI for the WDTE playground
//!
//! A Yew-based page with an editor, a Run button, canned examples and
//! shareable links. The WDTE interpreter itself is a separate WebAssembly
//! module loaded by `index.html`.

mod app;
mod components;
mod host;
mod markdown;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("Error initializing logger: {}", e).into());
    }

    yew::Renderer::<app::App>::new().render();
}
