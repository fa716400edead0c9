//! Authentic-Eye Web App (Leptos + WASM)

mod api;
mod app;
mod components;
mod logging;
mod notifier;
mod preview;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(app::App);
}
