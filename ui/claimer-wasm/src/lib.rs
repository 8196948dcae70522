//! Crypto box claimer WASM bindings.
//!
//! Exposes the claimer state store to the browser view layer. State lives in
//! `localStorage`; toasts are forwarded to a JS callback.

pub mod app;
pub mod storage;
pub mod toast;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
}
