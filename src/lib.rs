//! Progressive enhancement for server-rendered pages: card fade-in, submit spinners, a
//! persisted background-music playlist and scroll navigation buttons.
//!
//! Built as a `cdylib` for `wasm32-unknown-unknown`; the start hook below wires
//! everything. The playlist logic and decision helpers are plain Rust and tested natively.

pub mod components;
pub mod db;
pub mod diagnostics;
pub mod models;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    components::boot();
}
