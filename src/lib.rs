//! Browser client for the placement profiling portal.
//!
//! ARCHITECTURE
//! ============
//! Students fill three profile forms (personal, academic, skills) that are
//! drafted into local storage step by step, reconciled against the server
//! profile on every visit, and submitted in one normalized payload. Admins
//! get a dashboard and a roll-number lookup.
//!
//! `state` holds the storage-backed logic behind small traits so it runs
//! under native tests; `pages` and `components` bind it to the DOM in the
//! `csr` build.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
