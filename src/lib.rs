//! # portal-client
//!
//! Leptos + WASM frontend for the event-registration portal.
//!
//! The core is the session store (`state::session`), which holds the signed-in
//! user's credential and profile across reloads, and the navigation guard
//! (`guard`), which decides for every route transition whether to allow it or
//! redirect. Pages, the REST adapter, and browser storage glue sit around them.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount `App` into `<body>`.
///
/// The app renders only in the browser, so the session is restored from
/// browser storage before the first guard decision.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
