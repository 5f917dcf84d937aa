//! LAS Portal Web App (Leptos + WASM)

pub mod app;
pub mod browser;
pub mod components;
pub mod pages;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
